use common::domain::{BinStats, DomainResult, StatsRepository};
use std::sync::Arc;
use tracing::debug;

/// Statistics aggregator. Read-only; never mutates bins or pickups.
pub struct StatsService {
    stats_repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(stats_repository: Arc<dyn StatsRepository>) -> Self {
        Self { stats_repository }
    }

    pub async fn compute_stats(&self) -> DomainResult<BinStats> {
        debug!("Computing statistics");
        self.stats_repository.compute_stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::domain::{DomainError, MockStatsRepository};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_compute_stats() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo.expect_compute_stats().times(1).return_once(|| {
            Ok(BinStats {
                total_bins: 1,
                full_bins: 0,
                empty_bins: 1,
                total_pickups: 1,
                total_weight_collected: Decimal::new(125, 1),
            })
        });

        let service = StatsService::new(Arc::new(mock_repo));

        let stats = service.compute_stats().await.unwrap();
        assert_eq!(stats.total_bins, 1);
        assert_eq!(stats.empty_bins, 1);
        assert_eq!(stats.total_weight_collected, Decimal::new(125, 1));
    }

    #[tokio::test]
    async fn test_compute_stats_store_failure() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo
            .expect_compute_stats()
            .times(1)
            .return_once(|| Err(DomainError::RepositoryError(anyhow::anyhow!("timeout"))));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.compute_stats().await;
        assert!(matches!(result, Err(DomainError::RepositoryError(_))));
    }
}
