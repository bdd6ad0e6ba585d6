use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::domain::{BinService, PickupService, StatsService};
use crate::http::{
    create_bin, delete_bin, get_bin, get_stats, list_bins, list_pickups, record_pickup,
    update_fill_level,
};

/// Domain services shared by every handler
#[derive(Clone)]
pub struct WasteApiServices {
    pub bin_service: Arc<BinService>,
    pub pickup_service: Arc<PickupService>,
    pub stats_service: Arc<StatsService>,
}

/// Routes of the dashboard API
pub fn build_router(services: WasteApiServices) -> Router {
    Router::new()
        .route("/api/bins", get(list_bins).post(create_bin))
        .route("/api/bins/:id", get(get_bin).delete(delete_bin))
        .route("/api/bins/:id/fill", put(update_fill_level))
        .route("/api/bins/:id/pickup", post(record_pickup))
        .route("/api/pickups", get(list_pickups))
        .route("/api/stats", get(get_stats))
        .with_state(services)
}
