//! API routes module

pub mod health;

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_products::{handlers, PgProductRepository, ProductService};

/// Create all API routes. Health endpoints stay outside the `/api` nest,
/// see `main.rs`.
pub fn routes(db: DatabaseConnection) -> Router {
    let repository = PgProductRepository::new(db);
    let service = ProductService::new(repository);

    Router::new().nest("/products", handlers::router(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::health_router;
    use core_config::app_info;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    // Mirrors the assembly in main(): API routes nested under /api,
    // health and readiness merged at the top level.
    async fn app() -> Router {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let router = axum_helpers::create_router::<crate::openapi::ApiDoc>(routes(db.clone()))
            .await
            .unwrap();

        router
            .merge(health_router(app_info!()))
            .merge(health::ready_router(db))
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health_and_ready_serve_at_top_level() {
        assert_eq!(status_of(app().await, "/health").await, StatusCode::OK);
        // Readiness answers (ready or not) rather than falling through to 404
        assert_ne!(status_of(app().await, "/ready").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_endpoints_are_not_nested_under_api() {
        assert_eq!(
            status_of(app().await, "/api/ready").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(app().await, "/api/health").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_products_routes_are_nested_under_api() {
        // The collection route exists under /api/products; an empty mock
        // store means a storage error, not a routing miss.
        assert_ne!(
            status_of(app().await, "/api/products").await,
            StatusCode::NOT_FOUND
        );
    }
}
