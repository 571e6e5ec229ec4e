use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Open a connection pool described by `config`
pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    let backend = if config.is_sqlite() { "sqlite" } else { "postgres" };
    let db = Database::connect(config.into_connect_options()).await?;
    info!(backend, "Connected to relational store");
    Ok(db)
}

/// [`connect_from_config`] with exponential backoff, for process startup.
///
/// The last driver error is reported as [`DatabaseError::ConnectionFailed`].
pub async fn connect_from_config_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let attempt = || connect_from_config(config.clone());

    let result = match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    };
    result.map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Apply every pending migration of `M`
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_to_in_memory_sqlite() {
        let config = SqlConfig::new("sqlite::memory:").with_pool_size(1, 1);
        let db = connect_from_config(config).await.unwrap();
        assert!(db.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_with_retry_gives_up_on_bad_url() {
        let config = SqlConfig::new("nosuchdriver://nowhere");
        let policy = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(std::time::Duration::from_millis(1));

        let result = connect_from_config_with_retry(config, Some(policy)).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionFailed(_))));
    }

    mod broken {
        use sea_orm::ConnectionTrait;
        use sea_orm_migration::async_trait::async_trait;
        use sea_orm_migration::prelude::*;

        #[derive(DeriveMigrationName)]
        pub struct Migration;

        #[async_trait]
        impl MigrationTrait for Migration {
            async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
                manager
                    .get_connection()
                    .execute_unprepared("CREATE TABLE")
                    .await
                    .map(|_| ())
            }
        }

        pub struct Migrator;

        impl MigratorTrait for Migrator {
            fn migrations() -> Vec<Box<dyn MigrationTrait>> {
                vec![Box::new(Migration)]
            }
        }
    }

    #[tokio::test]
    async fn test_failed_migration_is_reported() {
        let config = SqlConfig::new("sqlite::memory:").with_pool_size(1, 1);
        let db = connect_from_config(config).await.unwrap();

        let result = run_migrations::<broken::Migrator>(&db, "hr_test").await;
        assert!(matches!(result, Err(DatabaseError::MigrationError(_))));
    }
}
