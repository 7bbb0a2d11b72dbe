pub mod ai;
pub mod category;
pub mod prompt;
pub mod static_rules;

use crate::ai::{GenerationError, TextGenerator};
use futures::future::join_all;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;

pub use category::{Category, UnknownCategory};
pub use static_rules::{classify_static, keywords_for, match_static, StaticMatch, RULE_SETS};

/// Failure of the generative classification attempt. Never surfaces past
/// [`classify_item`], which falls back to the rule-based classifier.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Text generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("Empty response from text generator")]
    EmptyResponse,
    #[error("Label '{0}' is not a known category")]
    InvalidLabel(String),
}

/// Which path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyMethod {
    Ai,
    RuleBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub method: ClassifyMethod,
}

impl Classification {
    /// Classify with the keyword rules only.
    pub fn rule_based(item: &ClassifiableItem) -> Self {
        let matched = match_static(&item.title, item.description.as_deref());
        debug!(
            "[Classification::rule_based] '{}' -> {} (keyword: {:?})",
            item.title, matched.category, matched.keyword
        );
        Self {
            category: matched.category,
            method: ClassifyMethod::RuleBased,
        }
    }
}

/// One category as presented to clients, with the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Every category in rule priority order, `other` last.
pub fn taxonomy() -> Vec<TaxonomyEntry> {
    RULE_SETS
        .iter()
        .map(|rule| rule.category)
        .chain(std::iter::once(Category::Other))
        .map(|category| TaxonomyEntry {
            id: category,
            name: category.name(),
            description: category.description(),
            keywords: keywords_for(category),
        })
        .collect()
}

/// The two fields of a goal, task or project that classification reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiableItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClassifiableItem {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }
}

/// Classify one item, trying the text generator first when one is given.
///
/// Generation errors, empty responses and out-of-taxonomy labels are logged
/// and answered by the rule-based classifier. This never fails.
pub fn classify_item(
    item: &ClassifiableItem,
    generator: Option<&dyn TextGenerator>,
) -> Classification {
    if let Some(generator) = generator {
        match ai::classify_with_ai(generator, &item.title, item.description.as_deref()) {
            Ok(category) => {
                debug!("[classify_item] '{}' -> {category} (ai)", item.title);
                return Classification {
                    category,
                    method: ClassifyMethod::Ai,
                };
            }
            Err(e) => {
                warn!(
                    "[classify_item] AI classification failed for '{}', using rules: {e}",
                    item.title
                );
            }
        }
    }

    Classification::rule_based(item)
}

/// Run [`classify_item`] on tokio's blocking pool, answering with the keyword
/// rules if the generator hasn't finished within `timeout`.
pub async fn classify_with_deadline(
    item: ClassifiableItem,
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
) -> Classification {
    let ai_item = item.clone();
    let task =
        tokio::task::spawn_blocking(move || classify_item(&ai_item, Some(generator.as_ref())));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(classification)) => classification,
        Ok(Err(e)) => {
            warn!("[classify_with_deadline] Task join error: {e}");
            Classification::rule_based(&item)
        }
        Err(_) => {
            warn!(
                "[classify_with_deadline] No answer for '{}' after {timeout:?}, using rules",
                item.title
            );
            Classification::rule_based(&item)
        }
    }
}

/// Classify many keyed items, at most `max_concurrent` generator calls at once.
///
/// Generator calls block, so each runs on tokio's blocking pool and is cut off
/// after `timeout`. Results come back in input order.
pub async fn categorize_items(
    items: Vec<(String, ClassifiableItem)>,
    generator: Option<Arc<dyn TextGenerator>>,
    max_concurrent: usize,
    timeout: Duration,
) -> Vec<(String, Classification)> {
    let Some(generator) = generator else {
        return items
            .into_iter()
            .map(|(id, item)| {
                let classification = Classification::rule_based(&item);
                (id, classification)
            })
            .collect();
    };

    info!(
        "[categorize_items] Classifying {} items with AI (max_concurrent={})",
        items.len(),
        max_concurrent
    );

    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));

    let tasks: Vec<_> = items
        .iter()
        .map(|(_, item)| {
            let sem = Arc::clone(&semaphore);
            let generator = Arc::clone(&generator);
            let item = item.clone();
            tokio::spawn(async move {
                let _permit = sem.acquire_owned().await.ok();
                classify_with_deadline(item, generator, timeout).await
            })
        })
        .collect();

    let results = join_all(tasks).await;

    items
        .into_iter()
        .zip(results)
        .map(|((id, item), result)| {
            let classification = result.unwrap_or_else(|e| {
                warn!("[categorize_items] Task join error: {e}");
                Classification::rule_based(&item)
            });
            (id, classification)
        })
        .collect()
}
