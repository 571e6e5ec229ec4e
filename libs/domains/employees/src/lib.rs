//! Employees Domain
//!
//! CRUD over the `employees` table plus the two lookups across the
//! employee → department foreign key.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_departments::InMemoryDepartmentRepository;
//! use domain_employees::{handlers, InMemoryEmployeeRepository, EmployeeService};
//!
//! let departments = InMemoryDepartmentRepository::new();
//! let employees = InMemoryEmployeeRepository::new().with_departments(departments.clone());
//! let service = EmployeeService::new(employees, Arc::new(departments));
//!
//! let router: axum::Router = handlers::router(service.clone());
//! let nested: axum::Router = handlers::department_employees_router(service);
//! ```

pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use db::DbEmployeeRepository;
pub use error::{EmployeeError, EmployeeResult};
pub use models::{CreateEmployee, Employee, UpdateEmployee};
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository};
pub use service::EmployeeService;
