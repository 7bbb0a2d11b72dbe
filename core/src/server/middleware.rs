//! Middleware for the HTTP service.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::debug;

use super::state::SharedState;

/// Log every request method and path.
pub async fn log_request(request: Request, next: Next) -> Response {
    debug!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

/// Bearer token authentication middleware.
/// Skipped for `/health` and when no token is configured.
pub async fn auth(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let Some(token) = &state.auth_token else {
        return next.run(request).await;
    };
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let header_value = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    let expected = format!("Bearer {token}");
    if header_value != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({ "error": "Unauthorized" })),
        )
            .into_response();
    }

    next.run(request).await
}
