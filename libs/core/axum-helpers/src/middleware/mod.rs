//! Request pipeline shared by every route.
//!
//! Order, outermost first:
//!
//! 1. [`request_logger`]: one structured event per request
//! 2. [`error_guard`]: turns a downstream panic into a fixed 500
//! 3. [`input_validation`]: rejects a bad `input` query parameter with 400
//!
//! Use [`apply_pipeline`] after every route and the fallback have been added,
//! since `Router::layer` only wraps what is already registered.

pub mod error_guard;
pub mod input_validation;
pub mod request_logger;

pub use error_guard::{GUARD_MESSAGE, error_guard};
pub use input_validation::{INVALID_INPUT_MESSAGE, UNEXPECTED_ERROR_MESSAGE, input_validation};
pub use request_logger::request_logger;

use axum::{Router, middleware};

/// Wrap `router` in the logging, error-guard and validation layers.
///
/// # Example
/// ```ignore
/// let app = axum_helpers::middleware::apply_pipeline(router);
/// ```
pub fn apply_pipeline(router: Router) -> Router {
    router
        .layer(middleware::from_fn(input_validation))
        .layer(middleware::from_fn(error_guard))
        .layer(middleware::from_fn(request_logger))
}
