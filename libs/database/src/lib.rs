//! Relational store plumbing shared by the domain crates and the API binary.
//!
//! # Examples
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use migration::Migrator;
//!
//! let db = sql::connect_from_config_with_retry(SqlConfig::new("sqlite::memory:"), None).await?;
//! sql::run_migrations::<Migrator>(&db, "hr_api").await?;
//! ```
//!
//! The URL scheme selects the backend: `sqlite://...` or `postgres://...`.

pub mod common;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
