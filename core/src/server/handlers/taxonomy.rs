use axum::Json;

use crate::classify::{taxonomy, TaxonomyEntry};

pub async fn get_taxonomy() -> Json<Vec<TaxonomyEntry>> {
    Json(taxonomy())
}
