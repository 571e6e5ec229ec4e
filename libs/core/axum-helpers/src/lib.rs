//! # Axum Helpers
//!
//! Shared HTTP plumbing for the HR services.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` with structured JSON responses and error codes
//! - **[`extractors`]**: `IdPath` and `ValidatedJson`
//! - **[`middleware`]**: request logging, panic guard, `input` sanitization
//! - **[`validation`]**: the `input` acceptance rule
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{middleware::apply_pipeline, server::{create_production_app, create_router}};
//! use core_config::{Environment, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new(), &Environment::Development);
//!     let app = apply_pipeline(router);
//!     create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;
pub mod validation;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use middleware::apply_pipeline;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
pub use validation::is_valid_input;
