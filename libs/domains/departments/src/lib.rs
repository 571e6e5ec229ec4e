//! Departments Domain
//!
//! CRUD over the `departments` table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory + sea-orm)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_departments::{
//!     handlers,
//!     repository::InMemoryDepartmentRepository,
//!     service::DepartmentService,
//! };
//!
//! let repository = InMemoryDepartmentRepository::new();
//! let service = DepartmentService::new(repository);
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use db::DbDepartmentRepository;
pub use error::{DepartmentError, DepartmentResult};
pub use models::{CreateDepartment, Department, UpdateDepartment};
pub use repository::{DepartmentRepository, InMemoryDepartmentRepository};
pub use service::DepartmentService;
