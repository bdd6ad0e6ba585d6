//! JSON shapes of the dashboard API. Field names match what the browser
//! dashboard reads: snake_case rows for bins and pickups, camelCase stats.
//! Weights are written as JSON numbers.

use chrono::{DateTime, Utc};
use common::domain::{Bin, BinStats, PickupWithBin};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct BinResponse {
    pub id: i32,
    pub location: String,
    #[serde(rename = "type")]
    pub bin_type: String,
    pub fill_level: i32,
    /// Derived from `fill_level` on every read
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bin> for BinResponse {
    fn from(bin: Bin) -> Self {
        let status = bin.status().as_str();
        Self {
            id: bin.id,
            location: bin.location,
            bin_type: bin.bin_type,
            fill_level: bin.fill_level,
            status,
            created_at: bin.created_at,
            updated_at: bin.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PickupResponse {
    pub id: i64,
    pub bin_id: i32,
    pub collected_kg: Decimal,
    pub pickup_time: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "type")]
    pub bin_type: String,
}

impl From<PickupWithBin> for PickupResponse {
    fn from(row: PickupWithBin) -> Self {
        Self {
            id: row.pickup.id,
            bin_id: row.pickup.bin_id,
            collected_kg: row.pickup.collected_kg,
            pickup_time: row.pickup.pickup_time,
            location: row.location,
            bin_type: row.bin_type,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_bins: i64,
    pub full_bins: i64,
    pub empty_bins: i64,
    pub total_pickups: i64,
    pub total_weight_collected: Decimal,
}

impl From<BinStats> for StatsResponse {
    fn from(stats: BinStats) -> Self {
        Self {
            total_bins: stats.total_bins,
            full_bins: stats.full_bins,
            empty_bins: stats.empty_bins,
            total_pickups: stats.total_pickups,
            total_weight_collected: stats.total_weight_collected,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBinResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBinBody {
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub bin_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFillLevelBody {
    pub fill_level: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPickupBody {
    pub collected_weight: Option<Decimal>,
}
