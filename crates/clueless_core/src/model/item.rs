//! Item domain model.
//!
//! # Responsibility
//! - Define the timestamped record managed by the item store.
//! - Keep identity and creation time read-only once assigned.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `timestamp` records the moment of logical creation, not access time.
//! - Items are only fabricated inside this crate; callers go through
//!   `ItemStore::create`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every item held by a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Timestamped record with a store-assigned identity.
///
/// Fields are private so external callers cannot fabricate an item with a
/// duplicate or inconsistent identity; the store is the only construction
/// path. Serde is the import/export representation: `id` as a UUID string,
/// `timestamp` as i64 Unix epoch milliseconds (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable global ID used for lookup and deletion.
    id: ItemId,
    /// Unix epoch milliseconds, UTC. Set once at creation.
    timestamp: i64,
}

impl Item {
    /// Creates an item with a generated stable ID and the given creation
    /// instant.
    pub(crate) fn new_at(timestamp_ms: i64) -> Self {
        Self::from_parts(Uuid::new_v4(), timestamp_ms)
    }

    /// Reassembles an item from already-persisted identity and timestamp.
    ///
    /// Used by repository read paths where identity already exists in
    /// storage.
    pub(crate) fn from_parts(id: ItemId, timestamp_ms: i64) -> Self {
        Self {
            id,
            timestamp: timestamp_ms,
        }
    }

    /// Stable identifier assigned at creation.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Creation instant in Unix epoch milliseconds (UTC).
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::Item;
    use uuid::Uuid;

    #[test]
    fn new_at_assigns_fresh_id_and_keeps_timestamp() {
        let item = Item::new_at(1_700_000_000_000);

        assert!(!item.id().is_nil());
        assert_eq!(item.timestamp(), 1_700_000_000_000);
    }

    #[test]
    fn from_parts_preserves_identity() {
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let item = Item::from_parts(id, 42);

        assert_eq!(item.id(), id);
        assert_eq!(item.timestamp(), 42);
    }
}
