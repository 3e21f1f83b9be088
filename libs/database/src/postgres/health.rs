use sea_orm::DatabaseConnection;

use crate::common::{DatabaseError, DatabaseResult};

/// Check that the database connection is alive.
///
/// Issues a ping over the pool; intended for readiness endpoints.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
