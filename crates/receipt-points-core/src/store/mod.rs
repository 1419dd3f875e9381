//! Storage abstraction for Receipt Points.
//!
//! The [`ReceiptStore`] trait is the only place receipts and scores live.
//! Entries are created once by [`submit`] and never updated or removed.
//!
//! Implementations must be `Send + Sync`: the HTTP layer shares one store
//! across all request handlers.

pub mod memory;

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Receipt, ScoreRecord, StoredReceipt};
use crate::scoring::calculate_points;

/// Abstract storage backend for submitted receipts.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`insert`](ReceiptStore::insert) | Record a receipt and its score under an id |
/// | [`get_points`](ReceiptStore::get_points) | Look up the score for an id |
/// | [`list_receipts`](ReceiptStore::list_receipts) | All receipts keyed by id |
/// | [`len`](ReceiptStore::len) | Number of stored entries |
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Records `entry` under `id`. The receipt and score become visible
    /// together. Fails if `id` is already taken.
    async fn insert(&self, id: &str, entry: StoredReceipt) -> Result<()>;

    async fn get_points(&self, id: &str) -> Result<Option<ScoreRecord>>;

    /// Returns every stored receipt, keyed by id in ascending order.
    async fn list_receipts(&self) -> Result<BTreeMap<String, Receipt>>;

    async fn len(&self) -> Result<usize>;
}

/// Scores `receipt`, stores it under a fresh UUID v4, and returns the id.
pub async fn submit(store: &dyn ReceiptStore, receipt: Receipt) -> Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    let score = ScoreRecord {
        points: calculate_points(&receipt),
    };
    store.insert(&id, StoredReceipt { receipt, score }).await?;
    Ok(id)
}
