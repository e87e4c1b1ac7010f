mod config;
mod constants;
mod core_cli;
mod core_error;
mod core_ftpcommand;
mod core_log;
mod core_network;
mod core_storage;
mod server;
mod session;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::core_cli::Cli;
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    core_log::logger::init_logger(args.verbose);

    // Load configuration from the TOML file
    let mut config = Config::load_from_file(&args.config)?;

    // Override the listen port from CLI if provided
    if let Some(listen_port) = args.listen_port {
        config.server.listen_port = listen_port;
    }

    // Run the FTP gateway
    server::run(config).await?;

    Ok(())
}
