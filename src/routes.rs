use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{protected, public};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Assemble the full application router over the injected state
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(journal_public_routes())
        // Protected API
        .merge(journal_protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Read-only collection access, no credential required.
///
/// Search lives under its own path segment so that listing the collection
/// and looking up one title can never shadow each other.
fn journal_public_routes() -> Router<AppState> {
    Router::new()
        .route("/journal", get(public::journal::list_all))
        .route("/journal/search/:title", get(public::journal::search))
}

/// Caller-scoped operations; the auth gate applies to this tier only
fn journal_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/journal", post(protected::journal::create))
        .route("/api/journal/mine", get(protected::journal::list_mine))
        .route(
            "/api/journal/:id",
            put(protected::journal::update).delete(protected::journal::delete),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Journal API",
            "version": version,
            "description": "Ownership-scoped journal entries over HTTP",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "list": "GET /journal (public)",
                "search": "GET /journal/search/:title (public)",
                "mine": "GET /api/journal/mine (protected)",
                "create": "POST /api/journal (protected)",
                "update": "PUT /api/journal/:id (protected)",
                "delete": "DELETE /api/journal/:id (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
