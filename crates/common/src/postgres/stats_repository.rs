use crate::domain::{BinStats, DomainError, DomainResult, StatsRepository, FULL_FILL_LEVEL};
use crate::postgres::PostgresClient;
use async_trait::async_trait;
use tracing::debug;

#[derive(Clone)]
pub struct PostgresStatsRepository {
    client: PostgresClient,
}

impl PostgresStatsRepository {
    pub fn new(client: PostgresClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsRepository for PostgresStatsRepository {
    async fn compute_stats(&self) -> DomainResult<BinStats> {
        debug!("Computing bin statistics");

        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let row = conn
            .query_one(
                "SELECT
                    (SELECT COUNT(*) FROM bins),
                    (SELECT COUNT(*) FROM bins WHERE fill_level >= $1),
                    (SELECT COUNT(*) FROM bins WHERE fill_level = 0),
                    (SELECT COUNT(*) FROM pickup_logs),
                    (SELECT COALESCE(SUM(collected_kg), 0) FROM pickup_logs)",
                &[&FULL_FILL_LEVEL],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        let stats = BinStats {
            total_bins: row.get(0),
            full_bins: row.get(1),
            empty_bins: row.get(2),
            total_pickups: row.get(3),
            total_weight_collected: row.get(4),
        };

        debug!(
            total_bins = stats.total_bins,
            total_pickups = stats.total_pickups,
            "Computed bin statistics"
        );
        Ok(stats)
    }
}
