//! Documentation of a vocational-guidance catalog API.
//!
//! Read-only REST facade over the MySQL catalog behind the guidance app:
//! departamentos, provincias, instituciones (with their sedes), carreras,
//! plus two RIASEC matching endpoints that rank carreras against a client
//! interest code.
//!
//!
//!
//! # Endpoints
//!
//! - `GET /` acknowledgement text
//! - `GET /departamentos` all regions
//! - `GET /provincias/{id}` sub-regions of a region
//! - `GET /instituciones/{id}` institutions with a site in a sub-region
//! - `GET /carreras/{id}` programs offered by an institution
//! - `GET /match_riasec?code=SIA` top 5 university and top 5 institute
//!   programs ranked by interest-code overlap
//! - `GET /match/{dimension}` programs whose profile equals one dominant
//!   dimension exactly
//!
//! Validation failures come back as 400 with `{"error": ...}`, store
//! failures as 500 with the same shape.
//!
//!
//!
//! # Configuration
//!
//! Everything is environment-driven: `MYSQLHOST`, `MYSQLUSER`,
//! `MYSQLPASSWORD`, `MYSQLDATABASE`, `MYSQLPORT` for the store, `PORT` for
//! the listen port, `RUST_LOG` for log filtering. The pool is lazy, so the
//! server starts even when MySQL is still coming up.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run against a local MySQL.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;

use routes::{
    institutions_handler, match_dimension_handler, match_riasec_handler, programs_handler,
    regions_handler, root_handler, sub_regions_handler,
};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/departamentos", get(regions_handler))
        .route("/provincias/{region_id}", get(sub_regions_handler))
        .route("/instituciones/{sub_region_id}", get(institutions_handler))
        .route("/carreras/{institution_id}", get(programs_handler))
        .route("/match_riasec", get(match_riasec_handler))
        .route("/match/{dimension}", get(match_dimension_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
