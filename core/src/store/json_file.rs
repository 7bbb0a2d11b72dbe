use super::{Item, ItemKind, ItemStore, NewItem, StoreError};
use crate::classify::Category;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::NamedTempFile;

const ITEMS_FILE: &str = "items.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ItemsFile {
    #[serde(default)]
    next_seq: u64,
    #[serde(default)]
    items: Vec<Item>,
}

/// Item store backed by a single `items.json` under a root directory.
///
/// Reads go to disk every time. Each write lands atomically through a uniquely
/// named temp file, so a reader never sees a half-written file. Writers within
/// one process are serialized; writers in separate processes are not, and the
/// last read-modify-write wins.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open (creating the directory if needed) a store rooted at `root`.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root)?;
        Ok(Self {
            path: root.join(ITEMS_FILE),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ItemsFile, StoreError> {
        if !self.path.exists() {
            return Ok(ItemsFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, file: &ItemsFile) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, file)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

/// Compute a 16-character hex item ID.
fn compute_item_id(kind: ItemKind, title: &str, seq: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{kind}:{title}:{seq}").as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

impl ItemStore for JsonFileStore {
    fn list(&self, kind: Option<ItemKind>) -> Result<Vec<Item>, StoreError> {
        let file = self.load()?;
        Ok(file
            .items
            .into_iter()
            .filter(|item| kind.is_none() || kind == Some(item.kind))
            .collect())
    }

    fn get(&self, id: &str) -> Result<Item, StoreError> {
        self.load()?
            .items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    fn insert(&self, new_item: NewItem) -> Result<Item, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = self.load()?;

        let seq = file.next_seq;
        file.next_seq += 1;

        let item = Item {
            id: compute_item_id(new_item.kind, &new_item.title, seq),
            kind: new_item.kind,
            title: new_item.title,
            description: new_item.description,
            category: None,
        };
        file.items.push(item.clone());
        self.save(&file)?;

        debug!("[JsonFileStore::insert] {} {} '{}'", item.kind, item.id, item.title);
        Ok(item)
    }

    fn set_category(&self, id: &str, category: Category) -> Result<Item, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = self.load()?;

        let item = file
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        item.category = Some(category);
        let updated = item.clone();
        self.save(&file)?;

        Ok(updated)
    }
}
