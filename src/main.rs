use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use media_gateway::config::{self, GatewayConfig};
use media_gateway::http::GatewayServer;
use media_gateway::observability::logging;

/// Edge gateway that relays browser-restricted media URLs with CORS forced on.
#[derive(Debug, Parser)]
#[command(name = "media-gateway", version)]
struct Args {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address from the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => {
            let mut config = GatewayConfig::default();
            config::apply_env_overrides(&mut config);
            config
        }
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("media-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        connect_timeout_secs = config.upstream.connect_secs,
        request_timeout_secs = config.upstream.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = GatewayServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
