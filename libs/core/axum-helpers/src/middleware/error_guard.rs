use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Body written when a downstream handler panics
pub const GUARD_MESSAGE: &str = "Something went wrong. Please try again later";

/// Run the rest of the stack and convert a panic into a plain-text 500.
///
/// The panic is logged with the request method and path and does not
/// propagate past this layer.
pub async fn error_guard(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                %method,
                %path,
                reason = panic_reason(panic.as_ref()),
                "Unhandled failure while processing request"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, GUARD_MESSAGE).into_response()
        }
    }
}

pub(super) fn panic_reason(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown"
    }
}
