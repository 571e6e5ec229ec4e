use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepartmentError {
    #[error("Department {0} not found")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type DepartmentResult<T> = Result<T, DepartmentError>;

impl From<DbErr> for DepartmentError {
    fn from(err: DbErr) -> Self {
        DepartmentError::Database(err.to_string())
    }
}

/// Convert DepartmentError to AppError for standardized error responses
impl From<DepartmentError> for AppError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::NotFound(id) => {
                AppError::NotFound(format!("Department {} not found", id))
            }
            DepartmentError::Validation(msg) => AppError::BadRequest(msg),
            DepartmentError::Database(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for DepartmentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
