//! Owning collection for timestamped items.
//!
//! # Responsibility
//! - Act as the sole authority for item identity assignment and lifecycle.
//! - Delegate durability to repository implementations.
//!
//! # Invariants
//! - Every created item carries a fresh id and a creation-time stamp.
//! - Store APIs never bypass repository persistence contracts.

use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoResult};
use std::time::{SystemTime, UNIX_EPOCH};

/// Owning collection of items over a repository backend.
///
/// Single-owner by construction: the store holds no interior mutability and
/// no internal locking. Callers sharing a store across threads must
/// serialize access externally.
pub struct ItemStore<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new item and inserts it into the collection.
    ///
    /// # Contract
    /// - Generates a fresh stable id.
    /// - Stamps the current UTC time in epoch milliseconds.
    /// - On success the collection grows by exactly one and the returned
    ///   item is visible to `list`.
    pub fn create(&self) -> RepoResult<Item> {
        let item = Item::new_at(now_epoch_ms());
        self.repo.insert_item(&item)?;
        Ok(item)
    }

    /// Gets one item by stable id, `None` when absent.
    pub fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.repo.get_item(id)
    }

    /// Lists all current items in insertion order ascending.
    ///
    /// The result is an eager snapshot of the live set at call time;
    /// repeated calls with no intervening mutation return identical
    /// sequences.
    pub fn list(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_items()
    }

    /// Deletes the item with the matching id.
    ///
    /// Returns `RepoError::NotFound` for unknown ids; the collection is
    /// left unchanged in that case.
    pub fn delete(&self, id: ItemId) -> RepoResult<()> {
        self.repo.delete_item(id)
    }

    /// Returns the current collection size.
    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_items()
    }
}

// A system clock before the Unix epoch collapses to 0 rather than failing
// creation.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
