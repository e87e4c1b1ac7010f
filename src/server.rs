use crate::core_network::network;
use crate::core_storage::{KodoBackend, StorageBackend};
use crate::Config;
use anyhow::{Context, Result};
use log::{error, info};
use std::sync::Arc;

/// Runs the FTP gateway with the provided configuration.
///
/// The HTTP client and the Kodo backend are built once and shared by every
/// session, like the configuration itself.
///
/// # Arguments
///
/// * `config` - The server configuration.
///
/// # Returns
///
/// Result<(), anyhow::Error> indicating the success or failure of the operation.
pub async fn run(config: Config) -> Result<()> {
    info!("Starting server with config: {:?}", config);

    let http = reqwest::Client::builder()
        .build()
        .context("Failed to create the HTTP client")?;
    let backend: Arc<dyn StorageBackend> =
        Arc::new(KodoBackend::new(config.storage.clone(), http.clone()));
    info!("Serving bucket {:?}", config.storage.bucket);

    if let Err(e) = network::start_server(Arc::new(config), backend, http).await {
        error!("Failed to start server: {}", e);
        return Err(e);
    }

    Ok(())
}
