pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod web;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::Config;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);

    let cli = cli::Cli::parse();

    match cli.command.unwrap_or(cli::Commands::Serve) {
        cli::Commands::Serve => serve(config).await,
        cli::Commands::Initdb { drop } => cli::commands::initdb::run(&config, drop).await,
        cli::Commands::Forge => cli::commands::forge::run(&config).await,
        cli::Commands::Admin => cli::commands::admin::run(&config).await,
        cli::Commands::Init => {
            Config::create_default_if_missing()?;
            println!("Config file ready. Edit config.toml and run again.");
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Watchlist v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let state = web::create_app_state(config).await?;
    let app = web::router(state)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!("Error listening for shutdown: {}", e),
    }
}
