use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use std::time::Duration;

use crate::classify::{classify_with_deadline, ClassifiableItem, Classification};
use crate::server::state::SharedState;

/// Classify off the async workers when a generator is configured, since
/// generator calls block on a subprocess.
pub(in crate::server) async fn classify_blocking(
    state: &SharedState,
    item: ClassifiableItem,
) -> Classification {
    match &state.generator {
        Some(generator) => {
            classify_with_deadline(
                item,
                Arc::clone(generator),
                Duration::from_secs(state.timeout_secs),
            )
            .await
        }
        None => Classification::rule_based(&item),
    }
}

/// POST /categorize: `{ title, description? }` to `{ category, method }`
pub async fn categorize(
    State(state): State<SharedState>,
    Json(body): Json<ClassifiableItem>,
) -> Json<Classification> {
    Json(classify_blocking(&state, body).await)
}
