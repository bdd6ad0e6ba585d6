use crate::domain::result::DomainResult;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Point-in-time aggregates over bins and pickups
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinStats {
    pub total_bins: i64,
    pub full_bins: i64,
    pub empty_bins: i64,
    pub total_pickups: i64,
    pub total_weight_collected: Decimal,
}

/// Read-only aggregation over the bin and pickup relations
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn compute_stats(&self) -> DomainResult<BinStats>;
}
