//! Event hotels API server.
//!
//! Run with: `cargo run --bin hotels-server`
//! API: <http://localhost:4000/hotels>
//! Metrics: <http://localhost:9090/metrics>

mod config;

use axum::{Router, routing::get};
use config::Config;
use hotels_postgres::PostgresHotelStore;
use hotels_web::{AppState, build_router};
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_tracing(&config.server.log_level);

    info!("Starting hotels API");

    let prometheus_handle = PrometheusBuilder::new().install_recorder()?;
    hotels_core::metrics::register_business_metrics();

    info!(
        "Connecting to PostgreSQL: {}",
        config.postgres.url.split('@').next_back().unwrap_or("unknown")
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.postgres.max_connections)
        .min_connections(config.postgres.min_connections)
        .acquire_timeout(Duration::from_secs(config.postgres.connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.postgres.idle_timeout)))
        .connect(&config.postgres.url)
        .await?;

    let store = Arc::new(PostgresHotelStore::new(pool));

    if config.postgres.run_migrations {
        store.migrate().await?;
    } else {
        info!("Skipping database migrations");
    }

    let app = build_router(AppState::from_stores(store.clone(), store));

    let metrics_app = Router::new().route(
        "/metrics",
        get(move || async move { prometheus_handle.render() }),
    );

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    let server_handle = spawn_server(listener, app, shutdown_tx.subscribe(), "HTTP");

    let metrics_listener = TcpListener::bind(config.server.metrics_address()).await?;
    info!(
        "Prometheus metrics available at http://{}/metrics",
        metrics_listener.local_addr()?
    );
    let metrics_handle = spawn_server(metrics_listener, metrics_app, shutdown_tx.subscribe(), "Metrics");

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, initiating graceful shutdown..."),
        Err(err) => error!("Unable to listen for shutdown signal: {err}"),
    }

    let _ = shutdown_tx.send(());

    let grace = Duration::from_secs(config.server.shutdown_timeout);
    let drained = tokio::time::timeout(grace, async {
        if let Err(e) = server_handle.await {
            warn!("Server task error during shutdown: {e}");
        }
        if let Err(e) = metrics_handle.await {
            warn!("Metrics server task error during shutdown: {e}");
        }
    })
    .await;

    if drained.is_err() {
        warn!("Shutdown timed out after {}s", grace.as_secs());
    }

    info!("Hotels API stopped");
    Ok(())
}

/// Serve `app` on `listener` until a shutdown message arrives.
fn spawn_server(
    listener: TcpListener,
    app: Router,
    mut shutdown_rx: broadcast::Receiver<()>,
    name: &'static str,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await;

        if let Err(e) = result {
            error!("{name} server error: {e}");
        }
    })
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
