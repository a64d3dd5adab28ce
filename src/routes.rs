//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Welcome banner
//! - `GET  /health`   - Storage health check
//! - `/api/*`         - Expense REST API and info banner
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin on the expense routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, home_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routing table with state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash
/// normalization, so `/api/expenses/` and `/api/expenses` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
