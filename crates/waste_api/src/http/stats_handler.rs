use axum::extract::State;
use axum::Json;
use common::http::ApiError;
use tracing::instrument;

use crate::http::{StatsResponse, WasteApiServices};

#[instrument(name = "GetStats", skip(services))]
pub async fn get_stats(
    State(services): State<WasteApiServices>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = services
        .stats_service
        .compute_stats()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch statistics"))?;

    Ok(Json(stats.into()))
}
