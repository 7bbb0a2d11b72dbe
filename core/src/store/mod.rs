//! Goal, task and project storage.
//!
//! The classifier never persists anything itself; callers read items from an
//! [`ItemStore`] and write the chosen category back with `set_category`.

mod categorize;
mod json_file;

pub use categorize::{categorize_all, CategorizeOptions, CategorizeSummary, ItemResult};
pub use json_file::JsonFileStore;

use crate::classify::{Category, ClassifiableItem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Item not found: {0}")]
    NotFound(String),
}

/// Plural spellings are accepted on input, matching [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[serde(alias = "goals")]
    Goal,
    #[serde(alias = "tasks")]
    Task,
    #[serde(alias = "projects")]
    Project,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Goal => "goal",
            ItemKind::Task => "task",
            ItemKind::Project => "project",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goal" | "goals" => Ok(ItemKind::Goal),
            "task" | "tasks" => Ok(ItemKind::Task),
            "project" | "projects" => Ok(ItemKind::Project),
            other => Err(format!("Unknown item kind '{other}': expected goal, task or project")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Item {
    pub fn classifiable(&self) -> ClassifiableItem {
        ClassifiableItem::new(self.title.clone(), self.description.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub kind: ItemKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub trait ItemStore: Send + Sync {
    /// All items, optionally of one kind, in insertion order.
    fn list(&self, kind: Option<ItemKind>) -> Result<Vec<Item>, StoreError>;

    fn get(&self, id: &str) -> Result<Item, StoreError>;

    fn insert(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Write a category back to an existing item.
    fn set_category(&self, id: &str, category: Category) -> Result<Item, StoreError>;
}
