use super::{ItemKind, ItemStore, StoreError};
use crate::ai::{TextGenerator, DEFAULT_TIMEOUT_SECS};
use crate::classify::{categorize_items, Category, ClassifyMethod};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategorizeOptions {
    /// Restrict to one kind of item.
    pub kind: Option<ItemKind>,
    /// Skip items that already carry a category.
    pub only_uncategorized: bool,
    pub max_concurrent: usize,
    /// Per-item limit on a generator call.
    pub timeout_secs: u64,
}

impl Default for CategorizeOptions {
    fn default() -> Self {
        Self {
            kind: None,
            only_uncategorized: false,
            max_concurrent: 2,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub method: ClassifyMethod,
    /// Category held before this run.
    pub previous: Option<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizeSummary {
    /// Items considered after filtering.
    pub total: usize,
    /// Items whose stored category changed.
    pub updated: usize,
    pub by_method: HashMap<ClassifyMethod, usize>,
    pub results: Vec<ItemResult>,
}

/// Reclassify stored items and write each category back.
///
/// Classification itself never fails; only store reads and writes can. A
/// failed write for one item is logged and the run continues.
pub async fn categorize_all(
    store: &dyn ItemStore,
    generator: Option<Arc<dyn TextGenerator>>,
    options: &CategorizeOptions,
) -> Result<CategorizeSummary, StoreError> {
    let items: Vec<_> = store
        .list(options.kind)?
        .into_iter()
        .filter(|item| !options.only_uncategorized || item.category.is_none())
        .collect();

    let keyed = items
        .iter()
        .map(|item| (item.id.clone(), item.classifiable()))
        .collect();
    let classifications = categorize_items(
        keyed,
        generator,
        options.max_concurrent,
        Duration::from_secs(options.timeout_secs),
    )
    .await;

    let mut summary = CategorizeSummary {
        total: items.len(),
        ..CategorizeSummary::default()
    };

    for (item, (_, classification)) in items.into_iter().zip(classifications) {
        *summary.by_method.entry(classification.method).or_insert(0) += 1;

        if item.category != Some(classification.category) {
            match store.set_category(&item.id, classification.category) {
                Ok(_) => summary.updated += 1,
                Err(e) => {
                    warn!("[categorize_all] Failed to update {}: {e}", item.id);
                    continue;
                }
            }
        }

        summary.results.push(ItemResult {
            id: item.id,
            title: item.title,
            category: classification.category,
            method: classification.method,
            previous: item.category,
        });
    }

    info!(
        "[categorize_all] {} items, {} updated",
        summary.total, summary.updated
    );
    Ok(summary)
}
