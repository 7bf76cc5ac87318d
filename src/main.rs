//! Rover API server entry point.

use anyhow::{Context, Result};
use clap::Parser;
use mars_rover::{Grid, MissionConfig, MissionControl};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Serve the rover control API over HTTP.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version, about)]
struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "ROVER_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Seed for obstacle generation; omit for a random map on every start.
    #[arg(long, env = "ROVER_SEED")]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "ROVER_LOG", default_value = "info")]
    log_level: String,

    /// Default map width.
    #[arg(long, default_value_t = Grid::DEFAULT_WIDTH)]
    width: i32,

    /// Default map height.
    #[arg(long, default_value_t = Grid::DEFAULT_HEIGHT)]
    height: i32,

    /// Default per-cell obstacle probability.
    #[arg(long, default_value_t = Grid::DEFAULT_OBSTACLE_PROBABILITY)]
    obstacle_probability: f64,

    /// Largest map, in cells, a configure request may ask for.
    #[arg(long, env = "ROVER_MAX_CELLS", default_value_t = MissionConfig::DEFAULT_MAX_CELLS)]
    max_cells: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = MissionConfig {
        default_width: args.width,
        default_height: args.height,
        default_obstacle_probability: args.obstacle_probability,
        seed: args.seed,
        max_cells: args.max_cells,
        ..Default::default()
    };

    // Reject bad defaults at startup rather than on the first request.
    let default_map = Grid::new(args.width, args.height, Some(args.obstacle_probability))
        .context("invalid default map settings")?;
    config
        .check_map_size(&default_map)
        .context("invalid default map settings")?;

    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;

    tracing::info!(seed = ?args.seed, width = args.width, height = args.height, "starting rover API");
    mars_rover::api::serve(listener, MissionControl::in_memory(config), shutdown_signal()).await?;
    tracing::info!("rover API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
