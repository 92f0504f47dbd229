//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the store delegates durability to.
//! - Isolate SQLite query details from collection-level orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - An operation is fully applied or not applied at all.

pub mod item_repo;
