mod config;
mod shutdown;

use anyhow::Context;
use common::postgres::{
    PostgresBinRepository, PostgresClient, PostgresPickupRepository, PostgresStatsRepository,
};
use common::telemetry::{init_telemetry, shutdown_telemetry, TelemetryProviders};
use config::ServiceConfig;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use waste_api::domain::{BinService, PickupService, StatsService};
use waste_api::http::WasteApiServices;
use waste_api::waste_api::WasteApi;

#[tokio::main]
async fn main() {
    let config = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let telemetry_providers: Option<TelemetryProviders> =
        match init_telemetry(&config.telemetry_config()) {
            Ok(providers) => providers,
            Err(e) => {
                eprintln!("Failed to initialize telemetry: {}", e);
                std::process::exit(1);
            }
        };

    info!(
        otel_enabled = config.otel_enabled,
        http_port = config.http_port,
        "Starting smart-waste service"
    );
    debug!("Configuration: {:?}", config);

    let postgres_client = match initialize_postgres(&config).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize PostgreSQL: {:#}", e);
            shutdown_telemetry(telemetry_providers);
            std::process::exit(1);
        }
    };

    let services = WasteApiServices {
        bin_service: Arc::new(BinService::new(Arc::new(PostgresBinRepository::new(
            postgres_client.clone(),
        )))),
        pickup_service: Arc::new(PickupService::new(Arc::new(
            PostgresPickupRepository::new(postgres_client.clone()),
        ))),
        stats_service: Arc::new(StatsService::new(Arc::new(PostgresStatsRepository::new(
            postgres_client,
        )))),
    };

    let api = WasteApi::new(services, config.http_server_config());

    let token = CancellationToken::new();
    shutdown::spawn_signal_handler(token.clone());

    let mut server = tokio::spawn(api.run(token.clone()));

    let outcome = tokio::select! {
        joined = &mut server => joined,
        _ = token.cancelled() => {
            match tokio::time::timeout(config.shutdown_timeout(), &mut server).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(
                        timeout = ?config.shutdown_timeout(),
                        "In-flight requests did not finish before the shutdown timeout"
                    );
                    server.abort();
                    Ok(Ok(()))
                }
            }
        }
    };

    let exit_code = match outcome {
        Ok(Ok(())) => {
            info!("Application exiting normally");
            0
        }
        Ok(Err(e)) => {
            error!("HTTP server error: {:#}", e);
            1
        }
        Err(e) => {
            error!("HTTP server task panicked: {}", e);
            1
        }
    };

    shutdown_telemetry(telemetry_providers);
    std::process::exit(exit_code);
}

/// Build the pool, verify connectivity, and apply the schema
async fn initialize_postgres(config: &ServiceConfig) -> anyhow::Result<PostgresClient> {
    let postgres_config = config.postgres_config();
    info!(
        host = %postgres_config.host,
        port = postgres_config.port,
        database = %postgres_config.database,
        "Connecting to PostgreSQL"
    );

    let client = PostgresClient::new(&postgres_config).context("failed to create pool")?;
    client.ping().await.context("database is unreachable")?;
    client
        .ensure_schema()
        .await
        .context("failed to apply schema")?;

    info!("PostgreSQL ready");
    Ok(client)
}
