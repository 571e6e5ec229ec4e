//! SQLite test infrastructure
//!
//! Every `TestDatabase` is a private in-memory database with the workspace
//! migrations applied, so tests never share rows.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Migrated in-memory database for one test
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a fresh database with `departments` and `employees` tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // A single pooled connection: each SQLite memory connection is its own database
        let mut options = ConnectOptions::new(IN_MEMORY_URL);
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to apply migrations to test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Insert a department row directly and return its id.
    ///
    /// Useful for employee tests that only need a valid foreign key.
    pub async fn seed_department(&self, name: &str) -> i32 {
        let escaped = name.replace('\'', "''");
        self.connection
            .execute_unprepared(&format!(
                "INSERT INTO departments (name) VALUES ('{}')",
                escaped
            ))
            .await
            .expect("Failed to seed department")
            .last_insert_id() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.connection().ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let db1 = TestDatabase::new().await;
        let db2 = TestDatabase::new().await;

        assert_eq!(db1.seed_department("Finance").await, 1);
        assert_eq!(db1.seed_department("O'Hara Ops").await, 2);
        assert_eq!(db2.seed_department("Finance").await, 1);
    }
}
