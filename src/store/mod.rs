pub mod memory;
pub mod sqlite;

use std::collections::HashSet;

use anyhow::Result;
use tracing::{info, warn};

use crate::consts::SAVED_EXCUSES_KEY;
use crate::excuse::Excuse;

/// A flat string key-value store. Could be SQLite, a HashMap, etc.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Saved excuses, kept as one JSON array under [`SAVED_EXCUSES_KEY`].
///
/// Newest first. Reads are best effort: a missing or corrupt value reads
/// as an empty collection.
pub struct ExcuseStore {
    kv: Box<dyn KeyValueStore>,
}

impl ExcuseStore {
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// The underlying key-value store, for settings that share it.
    pub fn kv(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    /// Prepend `excuse` to the saved list.
    pub fn save(&self, excuse: &Excuse) -> Result<()> {
        let mut saved = self.list();
        saved.insert(0, excuse.clone());
        self.write(&saved)?;
        info!(id = %excuse.id, "saved excuse");
        Ok(())
    }

    /// All saved excuses, newest first. Never fails.
    pub fn list(&self) -> Vec<Excuse> {
        let json = match self.kv.get(SAVED_EXCUSES_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read saved excuses");
                return Vec::new();
            }
        };
        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&json) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "ignoring corrupt saved excuses");
                return Vec::new();
            }
        };
        // A bad record is dropped on its own; the rest survive.
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Excuse>(record) {
                Ok(excuse) => Some(excuse),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed saved excuse");
                    None
                }
            })
            .collect()
    }

    /// Remove every saved excuse with this id. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut saved = self.list();
        let before = saved.len();
        saved.retain(|excuse| excuse.id != id);
        if saved.len() == before {
            return Ok(());
        }
        self.write(&saved)?;
        info!(%id, "deleted excuse");
        Ok(())
    }

    /// Look up a saved excuse by id.
    pub fn get(&self, id: &str) -> Option<Excuse> {
        self.list().into_iter().find(|excuse| excuse.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|excuse| excuse.id == id)
    }

    /// Ids of all saved excuses.
    pub fn saved_ids(&self) -> HashSet<String> {
        self.list().into_iter().map(|excuse| excuse.id).collect()
    }

    /// Drop the whole saved collection.
    pub fn clear(&self) -> Result<()> {
        self.kv.remove(SAVED_EXCUSES_KEY)
    }

    fn write(&self, saved: &[Excuse]) -> Result<()> {
        let json = serde_json::to_string(saved)?;
        self.kv.set(SAVED_EXCUSES_KEY, &json)
    }
}
