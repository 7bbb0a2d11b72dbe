//! Router construction with all route groups.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers::{classify, health, items, taxonomy};
use super::middleware::{auth, log_request};
use super::state::SharedState;

/// Build the complete router with all REST routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // --- System ---
        .route("/health", get(health::health))
        .route("/info", get(health::info))
        // --- Classification ---
        .route("/categorize", post(classify::categorize))
        .route("/taxonomy", get(taxonomy::get_taxonomy))
        // --- Items ---
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/categorize", post(items::categorize_all))
        .route("/items/{id}", get(items::get_item))
        // --- Middleware ---
        .layer(axum::middleware::from_fn(log_request))
        .layer(axum::middleware::from_fn_with_state(state.clone(), auth))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
