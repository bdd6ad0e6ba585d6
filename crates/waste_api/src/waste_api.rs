use crate::http::{build_router, WasteApiServices};
use common::http::{run_http_server, HttpServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct WasteApi {
    services: WasteApiServices,
    config: HttpServerConfig,
}

impl WasteApi {
    pub fn new(services: WasteApiServices, config: HttpServerConfig) -> Self {
        debug!("Initializing waste API module");
        Self { services, config }
    }

    /// Serve the dashboard API until `cancellation_token` fires
    pub async fn run(self, cancellation_token: CancellationToken) -> anyhow::Result<()> {
        run_http_server(self.config, build_router(self.services), cancellation_token).await
    }
}
