//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the Axum applications in this
//! workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly, API docs, health checks, graceful shutdown
//! - **[`http`]**: CORS layer construction
//! - **[`errors`]**: structured error responses ([`AppError`])
//! - **[`validation`]**: ordered validation chains collecting every failure
//! - **[`extractors`]**: custom extractors (integer path id, validated JSON)

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    create_app, create_router, health_router, run_health_checks, shutdown_signal,
    HealthCheckFuture, HealthResponse,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, create_permissive_cors_layer};

// Re-export error types
pub use errors::{AppError, ErrorListResponse, ErrorResponse};

// Re-export validation primitives
pub use validation::{ErrorBag, FieldError, ValidateChain};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
