use axum::Router;
use domain_departments::{DbDepartmentRepository, DepartmentService, handlers};
use domain_employees::{DbEmployeeRepository, EmployeeService};
use std::sync::Arc;

/// `/departments` CRUD plus `GET /departments/{id}/employees`
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = DbDepartmentRepository::new(state.db.clone());
    let employees = EmployeeService::new(
        DbEmployeeRepository::new(state.db.clone()),
        Arc::new(repository.clone()),
    );

    handlers::router(DepartmentService::new(repository))
        .merge(domain_employees::handlers::department_employees_router(employees))
}
