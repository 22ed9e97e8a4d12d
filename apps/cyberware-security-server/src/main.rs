use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use modkit::HostRuntime;
use security::SecurityApp;
use tracing::{error, info};

mod config;
mod registry;
mod telemetry;

use config::AppConfig;

/// Cyber Ware security server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON, with secrets manager
    /// settings redacted, and exit.
    #[arg(long)]
    print_config: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    telemetry::init(&config.logging.level, cli.json_logs || config.logging.json)?;

    let secrets_registry = registry::secrets_registry()?;
    info!(
        drivers = %secrets_registry.drivers().collect::<Vec<_>>().join(","),
        "Registered secrets manager drivers"
    );

    let runtime = HostRuntime::builder(Arc::new(config))
        .module(Arc::new(SecurityApp::new(secrets_registry)))
        .build();

    let shutdown = runtime.cancellation_token().clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutdown requested");
        shutdown.cancel();
    });

    runtime.run().await
}
