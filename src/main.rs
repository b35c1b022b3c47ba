use std::net::SocketAddr;
use std::path::PathBuf;

use auth_echo::lifecycle::startup::resolve_config;
use auth_echo::net::listener;
use auth_echo::observability::{logging, metrics};
use auth_echo::{EchoServer, Shutdown};
use clap::Parser;

#[derive(Parser)]
#[command(name = "auth-echo")]
#[command(version, about = "Echo reverse-proxy authentication headers as JSON or HTML", long_about = None)]
struct Cli {
    /// TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address, e.g. 127.0.0.1:8080
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("auth-echo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        html_enabled = config.features.html_enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server = EchoServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
