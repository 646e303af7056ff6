//! HTTP server implementation using axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use fleetmap_core::FeedSnapshot;
use fleetmap_view::SnapshotStore;

/// Shared application state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<SnapshotStore>,
}

impl AppState {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

/// Create the axum router.
///
/// The render layer may live on another origin, so CORS is
/// permissive.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/snapshot", get(get_snapshot))
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the dashboard server until the task is dropped.
pub async fn run_server(store: Arc<SnapshotStore>, config: DashboardConfig) -> DashboardResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(DashboardError::Bind)?;

    info!(%addr, "Dashboard listening");

    axum::serve(listener, router)
        .await
        .map_err(DashboardError::Serve)
}

/// Serve the static map page.
async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Current render-state snapshot as JSON.
async fn get_snapshot(State(state): State<AppState>) -> Json<FeedSnapshot> {
    Json(state.store.snapshot())
}

/// Liveness probe.
async fn healthz() -> &'static str {
    "ok"
}
