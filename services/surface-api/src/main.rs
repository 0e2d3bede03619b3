//! Surface API Server
//!
//! Serves an isometric SVG rendering of z = sin(r)/r at `GET /surface`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use surface_api::routes::build_router;
use surface_api::state::AppState;

/// Command-line and environment settings for the surface service.
#[derive(Parser, Debug)]
#[command(name = "surface-api")]
#[command(about = "Serves an isometric SVG rendering of sin(r)/r")]
struct Args {
    /// Socket address to serve on
    #[arg(short, long, default_value = "127.0.0.1:8000", env = "SURFACE_LISTEN_ADDR")]
    listen: String,

    /// Fallback tracing filter when RUST_LOG holds no valid directive
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Tokio worker count; the runtime picks one per core when unset
    #[arg(long, env = "SURFACE_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let runtime = build_runtime(args.worker_threads).unwrap_or_else(|e| {
        eprintln!("surface-api: cannot start async runtime: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = runtime.block_on(run_server(args)) {
        error!("surface-api failed: {:#}", e);
        eprintln!("surface-api failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(args: Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting surface API server");

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    let state = Arc::new(AppState::new(prometheus));
    let app = build_router(state);

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Surface API listening on {}", addr);

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
