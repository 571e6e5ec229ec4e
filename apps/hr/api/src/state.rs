//! Shared application state passed to route constructors.

use database::sql::DatabaseConnection;

/// Cloned per router; the connection is an `Arc`ed pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Relational store connection pool
    pub db: DatabaseConnection,
}
