use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::server::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    version: &'static str,
    ai_enabled: bool,
    max_concurrent: usize,
}

pub async fn info(State(state): State<SharedState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION"),
        ai_enabled: state.generator.is_some(),
        max_concurrent: state.max_concurrent,
    })
}
