use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use common::http::{ApiError, MessageResponse};
use tracing::{debug, instrument};

use super::bin_handler::bin_id_from_path;
use crate::domain::RecordPickupRequest;
use crate::http::{PickupResponse, RecordPickupBody, WasteApiServices};

#[instrument(name = "RecordPickup", skip(services, path, body))]
pub async fn record_pickup(
    State(services): State<WasteApiServices>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<RecordPickupBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let bin_id = bin_id_from_path(path)?;
    let Json(body) = body?;

    let collected_kg = body
        .collected_weight
        .ok_or_else(|| ApiError::bad_request("collectedWeight is required"))?;

    let pickup = services
        .pickup_service
        .record_pickup(RecordPickupRequest {
            bin_id,
            collected_kg,
        })
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to record pickup"))?;

    debug!(pickup_id = pickup.id, "Pickup recorded via HTTP");

    Ok(Json(MessageResponse::new(
        "Pickup recorded and bin reset successfully",
    )))
}

#[instrument(name = "ListPickups", skip(services))]
pub async fn list_pickups(
    State(services): State<WasteApiServices>,
) -> Result<Json<Vec<PickupResponse>>, ApiError> {
    let pickups = services
        .pickup_service
        .list_pickups()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch pickup logs"))?;

    Ok(Json(pickups.into_iter().map(PickupResponse::from).collect()))
}
