//! Disease outbreak reporting backend.
//!
//! Clients submit case reports for a fixed set of Indian cities, then poll for the raw
//! reports, a per-location map rollup, headline analytics and outbreak alerts. Every read
//! is recomputed from the store; there is no push channel and no cache.
//!
//!
//!
//! # Endpoints
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /api/cases` | Every report, newest report date first |
//! | `POST /api/cases` | Submit `{disease, city, cases, timestamp}` |
//! | `GET /api/cases/historical?start_date=&end_date=` | Reports dated within the inclusive range |
//! | `GET /api/alerts` | Diseases above 1000 cases over the last seven days |
//! | `GET /api/map` | Reports grouped by location and disease, with severity |
//! | `GET /api/analytics` | Today, this week and all-time totals |
//! | `GET /api/cities?query=` | Registry search |
//! | `GET /api/diseases` | Suggested disease names |
//! | `POST /api/reset` | Wipe every report, requires `{"command": "deletedata"}` |
//!
//!
//!
//! # Configuration
//!
//! Read from the environment (or `.env`) at startup, see [`config::Config`].
//!
//! ```sh
//! PORT=8000 DATABASE_URL=sqlite://disease_tracker.db RUST_LOG=info cargo run -p outbreak
//! ```
//!
//! Seed a running server with demo data.
//! ```sh
//! cargo run -p seeder -- --days-before 10 --days-after 0
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod aggregation;
pub mod alerts;
pub mod analytics;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod operations;
pub mod policy;
pub mod reporting;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    alerts_handler, analytics_handler, cities_handler, diseases_handler, health_handler,
    historical_handler, list_cases_handler, map_handler, reset_handler, submit_case_handler,
};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load();

    info!("Initializing state...");
    let state = AppState::new(config).await?;

    info!("Starting server...");

    let app = router(state.clone()).layer(cors(&state.config));

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    info!("Server shutting down...");
    state.store.close().await;
    info!("Database closed");

    served?;
    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/cases", get(list_cases_handler).post(submit_case_handler))
        .route("/api/cases/historical", get(historical_handler))
        .route("/api/alerts", get(alerts_handler))
        .route("/api/map", get(map_handler))
        .route("/api/analytics", get(analytics_handler))
        .route("/api/cities", get(cities_handler))
        .route("/api/diseases", get(diseases_handler))
        .route("/api/reset", post(reset_handler))
        .with_state(state)
}

fn cors(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .map_err(|e| warn!("Ignoring invalid origin {origin}: {e}"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => error!("Failed to install Ctrl+C handler: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
