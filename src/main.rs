//! Banca Server: thesis-defense board management backend.
//!
//! Main entry point that loads configuration, wires all crates together
//! and serves the HTTP API until a shutdown signal arrives.

use std::future::IntoFuture;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use banca_api::{AppState, build_router};
use banca_core::config::AppConfig;
use banca_core::error::AppError;
use banca_database::DatabasePool;
use banca_database::migration::run_migrations;

/// Command-line arguments; every flag overrides the loaded configuration.
#[derive(Debug, Parser)]
#[command(name = "banca-server", version, about = "Banca HTTP server")]
struct Args {
    /// Directory holding `default.toml` and the per-environment overlays.
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Environment overlay to load (`{config_dir}/{env}.toml`).
    #[arg(long, env = "BANCA_ENV", default_value = "development")]
    env: String,

    /// Bind address.
    #[arg(long)]
    host: Option<String>,

    /// Bind port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Skip running database migrations at startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match load_configuration(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration files and apply command-line overrides
fn load_configuration(args: &Args) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load(&args.config_dir, &args.env)?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_migrate {
        config.database.auto_migrate = false;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Banca v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.auto_migrate {
        run_migrations(db.pool()).await?;
    } else {
        tracing::info!("Skipping database migrations");
    }

    // ── Step 2: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = build_router(AppState::new(config, db.clone()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Banca server listening on {}", addr);

    // ── Step 3: Graceful shutdown ────────────────────────────────
    let (stopping_tx, stopping_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = stopping_tx.send(true);
    });
    let mut server = tokio::spawn(server.into_future());

    let outcome = tokio::select! {
        joined = &mut server => match joined {
            Ok(result) => result.map_err(|e| AppError::internal(format!("Server error: {e}"))),
            Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
        },
        _ = drain_deadline(stopping_rx, grace) => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, dropping open connections");
            server.abort();
            Ok(())
        }
    };

    db.close().await;
    tracing::info!("Banca server shut down gracefully");
    outcome
}

/// Resolve `grace` after shutdown starts; never resolves if it does not.
async fn drain_deadline(mut stopping: watch::Receiver<bool>, grace: Duration) {
    if stopping.wait_for(|stopping| *stopping).await.is_err() {
        std::future::pending::<()>().await;
    }
    tokio::time::sleep(grace).await;
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
