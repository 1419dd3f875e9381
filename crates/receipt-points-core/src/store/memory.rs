//! In-memory [`ReceiptStore`] implementation.
//!
//! Uses a single `HashMap` behind `std::sync::RwLock`, so a receipt and
//! its score are always written under the same lock. Contents live for
//! the lifetime of the process.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;

use crate::models::{Receipt, ScoreRecord, StoredReceipt};

use super::ReceiptStore;

/// In-memory receipt store.
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, StoredReceipt>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoredReceipt>>> {
        self.entries
            .read()
            .map_err(|_| anyhow!("receipt store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoredReceipt>>> {
        self.entries
            .write()
            .map_err(|_| anyhow!("receipt store lock poisoned"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryStore {
    async fn insert(&self, id: &str, entry: StoredReceipt) -> Result<()> {
        let mut entries = self.write()?;
        if entries.contains_key(id) {
            bail!("receipt id already exists: {}", id);
        }
        entries.insert(id.to_string(), entry);
        Ok(())
    }

    async fn get_points(&self, id: &str) -> Result<Option<ScoreRecord>> {
        Ok(self.read()?.get(id).map(|e| e.score))
    }

    async fn list_receipts(&self) -> Result<BTreeMap<String, Receipt>> {
        Ok(self
            .read()?
            .iter()
            .map(|(id, e)| (id.clone(), e.receipt.clone()))
            .collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
