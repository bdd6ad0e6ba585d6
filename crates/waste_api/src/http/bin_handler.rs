use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use common::http::{ApiError, MessageResponse};
use tracing::{debug, instrument};

use crate::domain::{CreateBinRequest, DeleteBinRequest, GetBinRequest, UpdateFillLevelRequest};
use crate::http::{BinResponse, CreateBinBody, CreateBinResponse, UpdateFillLevelBody, WasteApiServices};

/// Parse the `:id` segment. Integers that no bin can have are unknown ids
/// (404); anything else is a malformed id (400).
pub(super) fn bin_id_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<i32, ApiError> {
    let Path(raw) = path?;

    if let Ok(bin_id) = raw.parse::<i32>() {
        return Ok(bin_id);
    }

    let digits = raw.strip_prefix('-').unwrap_or(&raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::not_found("Bin not found"));
    }

    Err(ApiError::bad_request("Invalid bin id"))
}

#[instrument(name = "ListBins", skip(services))]
pub async fn list_bins(
    State(services): State<WasteApiServices>,
) -> Result<Json<Vec<BinResponse>>, ApiError> {
    let bins = services
        .bin_service
        .list_bins()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch bins"))?;

    Ok(Json(bins.into_iter().map(BinResponse::from).collect()))
}

#[instrument(name = "CreateBin", skip(services, body))]
pub async fn create_bin(
    State(services): State<WasteApiServices>,
    body: Result<Json<CreateBinBody>, JsonRejection>,
) -> Result<Json<CreateBinResponse>, ApiError> {
    let Json(body) = body?;

    let (location, bin_type) = match (body.location, body.bin_type) {
        (Some(location), Some(bin_type))
            if !location.trim().is_empty() && !bin_type.trim().is_empty() =>
        {
            (location, bin_type)
        }
        _ => return Err(ApiError::bad_request("Location and type are required")),
    };

    let request = CreateBinRequest { location, bin_type };

    let bin = services
        .bin_service
        .create_bin(request)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to add bin"))?;

    debug!(bin_id = bin.id, "Bin created via HTTP");

    Ok(Json(CreateBinResponse {
        message: "Bin added successfully".to_string(),
        id: bin.id,
    }))
}

#[instrument(name = "GetBin", skip(services, path))]
pub async fn get_bin(
    State(services): State<WasteApiServices>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BinResponse>, ApiError> {
    let bin_id = bin_id_from_path(path)?;

    let bin = services
        .bin_service
        .get_bin(GetBinRequest { bin_id })
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch bin"))?;

    Ok(Json(bin.into()))
}

#[instrument(name = "UpdateFillLevel", skip(services, path, body))]
pub async fn update_fill_level(
    State(services): State<WasteApiServices>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateFillLevelBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let bin_id = bin_id_from_path(path)?;
    let Json(body) = body?;

    let fill_level = body
        .fill_level
        .ok_or_else(|| ApiError::bad_request("fillLevel is required"))?;

    services
        .bin_service
        .update_fill_level(UpdateFillLevelRequest {
            bin_id,
            fill_level,
        })
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to update fill level"))?;

    Ok(Json(MessageResponse::new("Fill level updated successfully")))
}

#[instrument(name = "DeleteBin", skip(services, path))]
pub async fn delete_bin(
    State(services): State<WasteApiServices>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let bin_id = bin_id_from_path(path)?;

    services
        .bin_service
        .delete_bin(DeleteBinRequest { bin_id })
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete bin"))?;

    Ok(Json(MessageResponse::new("Bin deleted successfully")))
}
