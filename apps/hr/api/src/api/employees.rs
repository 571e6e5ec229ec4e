use axum::Router;
use domain_departments::DbDepartmentRepository;
use domain_employees::{DbEmployeeRepository, EmployeeService, handlers};
use std::sync::Arc;

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = DbEmployeeRepository::new(state.db.clone());
    let departments = DbDepartmentRepository::new(state.db.clone());
    handlers::router(EmployeeService::new(repository, Arc::new(departments)))
}
