use crate::domain::result::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Decimal places kept for collected weights
pub const COLLECTED_KG_SCALE: u32 = 2;

/// Largest weight the ledger column holds
pub fn max_collected_kg() -> Decimal {
    Decimal::new(99_999_999, COLLECTED_KG_SCALE)
}

/// Append-only record of a bin being collected
#[derive(Debug, Clone, PartialEq)]
pub struct PickupLog {
    pub id: i64,
    pub bin_id: i32,
    pub collected_kg: Decimal,
    pub pickup_time: DateTime<Utc>,
}

/// Pickup log joined with the location and type of its bin
#[derive(Debug, Clone, PartialEq)]
pub struct PickupWithBin {
    pub pickup: PickupLog,
    pub location: String,
    pub bin_type: String,
}

/// Repository input for recording a pickup (already validated)
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPickupRepoInput {
    pub bin_id: i32,
    pub collected_kg: Decimal,
}

/// Repository trait for the pickup ledger
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PickupRepository: Send + Sync {
    /// Append a pickup log and reset the bin's fill level to 0 in one
    /// transaction. Neither write is visible unless both succeed.
    async fn record_pickup(&self, input: RecordPickupRepoInput) -> DomainResult<PickupLog>;

    /// List all pickups joined with their bin, most recent first
    async fn list_pickups(&self) -> DomainResult<Vec<PickupWithBin>>;
}
