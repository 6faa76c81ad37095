//! HTTP resource layer for LifeHub.
//!
//! Serves the five entity collections and the nutrition profile from
//! `lifehub_core`'s in-memory repository as a uniform JSON REST
//! surface under `/api`. All state lives in the injected repository;
//! restarting the process starts from an empty store.

use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use lifehub_core::{Finance, Meal, Study, Task, Workout};
use log::info;
use serde_json::{json, Value};
use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod profile;
pub mod resource;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Assembles the full API router over the given state.
///
/// Split out from `start_server` so tests can drive the router
/// directly with a fresh repository per test.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/finances", resource::router::<Finance>())
        .nest("/api/workouts", resource::router::<Workout>())
        .nest("/api/meals", resource::router::<Meal>())
        .nest("/api/tasks", resource::router::<Task>())
        .nest("/api/studies", resource::router::<Study>())
        .route("/api/nutrition-profile", post(profile::save))
        .route("/api/nutrition-profile/{user_id}", get(profile::fetch))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "ping": lifehub_core::ping(),
        "version": lifehub_core::core_version(),
    }))
}

pub async fn start_server() -> std::io::Result<()> {
    let config = Config::load();
    lifehub_core::init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(std::io::Error::other)?;

    info!("event=server_init module=server status=ok");
    let state = AppState::new();
    let app = router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("event=server_listening module=server address={address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stopped module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("event=shutdown_signal module=server signal=ctrl_c");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("event=shutdown_signal module=server signal=terminate");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
