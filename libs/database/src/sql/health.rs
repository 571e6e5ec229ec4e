use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Round-trip to the store, used by the readiness probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running store health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{SqlConfig, connect_from_config};

    #[tokio::test]
    async fn test_check_health_on_live_connection() {
        let config = SqlConfig::new("sqlite::memory:").with_pool_size(1, 1);
        let db = connect_from_config(config).await.unwrap();
        assert!(check_health(&db).await.is_ok());
    }
}
