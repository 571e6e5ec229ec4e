use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_departments::DepartmentError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee {0} not found")]
    NotFound(i32),

    /// A lookup through the department relation found no department
    #[error("Department {0} not found")]
    DepartmentNotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type EmployeeResult<T> = Result<T, EmployeeError>;

impl From<DbErr> for EmployeeError {
    fn from(err: DbErr) -> Self {
        EmployeeError::Database(err.to_string())
    }
}

impl From<DepartmentError> for EmployeeError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::NotFound(id) => EmployeeError::DepartmentNotFound(id),
            DepartmentError::Validation(msg) => EmployeeError::Validation(msg),
            DepartmentError::Database(msg) => EmployeeError::Database(msg),
        }
    }
}

/// Convert EmployeeError to AppError for standardized error responses
impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => AppError::NotFound(format!("Employee {} not found", id)),
            EmployeeError::DepartmentNotFound(id) => {
                AppError::NotFound(format!("Department {} not found", id))
            }
            EmployeeError::Validation(msg) => AppError::BadRequest(msg),
            EmployeeError::Database(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EmployeeError::NotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EmployeeError::DepartmentNotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EmployeeError::Database("FOREIGN KEY constraint failed".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_department_errors_convert() {
        let err: EmployeeError = DepartmentError::NotFound(4).into();
        assert!(matches!(err, EmployeeError::DepartmentNotFound(4)));
    }
}
