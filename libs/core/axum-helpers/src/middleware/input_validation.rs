use super::error_guard::panic_reason;
use crate::validation::is_valid_input;
use axum::{
    extract::{Query, Request},
    http::{StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Body written when the `input` parameter is rejected
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input detected";

/// Body written when the validator itself fails
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Deserialize)]
struct InputQuery {
    input: Option<String>,
}

/// Read the `input` parameter from `uri` and apply [`is_valid_input`].
fn screen(uri: &Uri) -> Result<bool, String> {
    let Query(query) =
        Query::<InputQuery>::try_from_uri(uri).map_err(|rejection| rejection.body_text())?;

    Ok(is_valid_input(query.input.as_deref()))
}

/// Run `check` with panics turned into errors.
fn contained<F>(check: F) -> Result<bool, String>
where
    F: FnOnce() -> Result<bool, String>,
{
    catch_unwind(AssertUnwindSafe(check))
        .unwrap_or_else(|panic| Err(panic_reason(panic.as_ref()).to_string()))
}

/// Check the optional `input` query parameter before routing continues.
///
/// Any failure of the check itself, including a panic, answers 500 with
/// [`UNEXPECTED_ERROR_MESSAGE`]. Failures in the handler travel up to
/// [`error_guard`](super::error_guard).
pub async fn input_validation(request: Request, next: Next) -> Response {
    match contained(|| screen(request.uri())) {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with invalid input parameter");
            (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE).into_response()
        }
        Err(error) => {
            tracing::error!(
                path = %request.uri().path(),
                %error,
                "Input validation failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn call(uri: &str) -> (StatusCode, String) {
        let app = Router::new()
            .route("/", get(|| async { "handled" }))
            .layer(middleware::from_fn(input_validation));

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_no_query_passes() {
        assert_eq!(call("/").await, (StatusCode::OK, "handled".into()));
    }

    #[tokio::test]
    async fn test_other_parameters_are_ignored() {
        assert_eq!(call("/?name=a%20b").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_input_passes() {
        assert_eq!(call("/?input=").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_alphanumeric_input_passes() {
        assert_eq!(call("/?input=Sales2024").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_script_input_is_rejected() {
        let (status, body) = call("/?input=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_whitespace_input_is_rejected() {
        let (status, _) = call("/?input=%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_input_key_is_unexpected_error() {
        let (status, body) = call("/?input=a&input=b").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, UNEXPECTED_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_ascii_input_is_rejected() {
        let (status, body) = call("/?input=%C2%BD").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_panicking_check_becomes_error() {
        let result = contained(|| -> Result<bool, String> { panic!("decoder blew up") });
        assert_eq!(result, Err("decoder blew up".to_string()));
    }

    #[test]
    fn test_contained_passes_results_through() {
        assert_eq!(contained(|| Ok(true)), Ok(true));
        assert_eq!(contained(|| Err("bad".to_string())), Err("bad".to_string()));
    }
}
