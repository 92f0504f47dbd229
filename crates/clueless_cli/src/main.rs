//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clueless_core` linkage.
//! - Exercise the open/create/list path against an in-memory store.

use clueless_core::db::open_db_in_memory;
use clueless_core::{ItemStore, SqliteItemRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("clueless_core ping={}", clueless_core::ping());
    println!("clueless_core version={}", clueless_core::core_version());

    let conn = open_db_in_memory()?;
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn)?);

    let item = store.create()?;
    println!("created item id={} timestamp_ms={}", item.id(), item.timestamp());
    println!("store count={}", store.count()?);

    Ok(())
}
