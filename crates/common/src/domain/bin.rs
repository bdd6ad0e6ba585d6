use crate::domain::result::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// Lowest fill level a bin may report
pub const MIN_FILL_LEVEL: i32 = 0;

/// Highest fill level a bin may report
pub const MAX_FILL_LEVEL: i32 = 100;

/// Fill level at which a bin starts counting as "Medium"
pub const MEDIUM_FILL_LEVEL: i32 = 25;

/// Fill level at which a bin starts counting as "Full"
pub const FULL_FILL_LEVEL: i32 = 75;

/// Waste bin tracked by the registry
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub id: i32,
    pub location: String,
    pub bin_type: String,
    pub fill_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bin {
    /// Status derived from the current fill level
    pub fn status(&self) -> FillStatus {
        FillStatus::classify(self.fill_level)
    }
}

/// Display classification of a fill level. Derived on read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    Empty,
    Low,
    Medium,
    Full,
}

impl FillStatus {
    /// Classify a fill level. Each band is closed on its lower bound, so 25 is
    /// "Medium" and 75 is "Full".
    pub fn classify(fill_level: i32) -> Self {
        match fill_level {
            i32::MIN..=MIN_FILL_LEVEL => FillStatus::Empty,
            level if level < MEDIUM_FILL_LEVEL => FillStatus::Low,
            level if level < FULL_FILL_LEVEL => FillStatus::Medium,
            _ => FillStatus::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FillStatus::Empty => "Empty",
            FillStatus::Low => "Low",
            FillStatus::Medium => "Medium",
            FillStatus::Full => "Full",
        }
    }
}

impl fmt::Display for FillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository input for creating a bin (already validated)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBinRepoInput {
    pub location: String,
    pub bin_type: String,
}

/// Repository input for setting a bin's fill level (already validated)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFillLevelRepoInput {
    pub bin_id: i32,
    pub fill_level: i32,
}

/// Repository trait for bin persistence operations
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BinRepository: Send + Sync {
    /// Insert a bin with a fill level of 0
    async fn create_bin(&self, input: CreateBinRepoInput) -> DomainResult<Bin>;

    /// Get a bin by ID
    async fn get_bin(&self, bin_id: i32) -> DomainResult<Option<Bin>>;

    /// Set the fill level of exactly one bin, refreshing `updated_at`.
    /// Returns `BinNotFound` when no row matches.
    async fn update_fill_level(&self, input: UpdateFillLevelRepoInput) -> DomainResult<()>;

    /// List all bins, newest first (descending ID)
    async fn list_bins(&self) -> DomainResult<Vec<Bin>>;

    /// Delete a bin and, through the store cascade, its pickup logs
    async fn delete_bin(&self, bin_id: i32) -> DomainResult<()>;
}
