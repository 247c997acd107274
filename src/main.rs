//! `payroll-engine` HTTP server.
//!
//! Loads the payroll configuration directory and serves the calculation API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "payroll-engine")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding payroll.yaml and wage_groups.yaml
    #[arg(short, long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Log level filter (e.g. `info`, `payroll_engine=debug`)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ConfigLoader::load(&cli.config)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
