use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::classify::classify_blocking;
use crate::server::error::ApiError;
use crate::server::state::SharedState;
use crate::store::{CategorizeOptions, CategorizeSummary, Item, ItemKind, NewItem};

#[derive(Deserialize)]
pub struct ItemsQuery {
    kind: Option<ItemKind>,
}

/// GET /items?kind=
pub async fn list_items(
    State(state): State<SharedState>,
    Query(q): Query<ItemsQuery>,
) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.store.list(q.kind)?))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.store.get(&id)?))
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(flatten)]
    item: NewItem,
    #[serde(default = "default_true")]
    auto_categorize: bool,
}

/// POST /items: store a new item, categorizing it unless told not to
pub async fn create_item(
    State(state): State<SharedState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.store.insert(body.item)?;
    if !body.auto_categorize {
        return Ok((StatusCode::CREATED, Json(item)));
    }

    let classification = classify_blocking(&state, item.classifiable()).await;
    let item = state.store.set_category(&item.id, classification.category)?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CategorizeRequest {
    kind: Option<ItemKind>,
    only_uncategorized: bool,
}

/// POST /items/categorize: reclassify stored items and write categories back
pub async fn categorize_all(
    State(state): State<SharedState>,
    Json(body): Json<CategorizeRequest>,
) -> Result<Json<CategorizeSummary>, ApiError> {
    let options = CategorizeOptions {
        kind: body.kind,
        only_uncategorized: body.only_uncategorized,
        max_concurrent: state.max_concurrent,
        timeout_secs: state.timeout_secs,
    };
    let summary =
        crate::store::categorize_all(state.store.as_ref(), state.generator.clone(), &options)
            .await?;
    Ok(Json(summary))
}
