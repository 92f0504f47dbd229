use clueless_core::db::migrations::latest_version;
use clueless_core::db::{open_db, open_db_in_memory};
use clueless_core::{ItemStore, RepoError, SqliteItemRepository};
use rusqlite::Connection;
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn create_returns_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let mut ids = HashSet::new();
    for _ in 0..10 {
        let item = store.create().unwrap();
        assert!(ids.insert(item.id()), "duplicate id {}", item.id());
    }
}

#[test]
fn create_makes_item_visible_to_list_with_same_identity() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let before = store.list().unwrap();
    let created = store.create().unwrap();
    let after = store.list().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    let listed = after
        .iter()
        .find(|item| item.id() == created.id())
        .expect("created item should be listed");
    assert_eq!(listed.timestamp(), created.timestamp());
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let created = store.create().unwrap();

    let loaded = store.get(created.id()).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn get_missing_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    assert!(store.get(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn list_returns_items_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let item_a = store.create().unwrap();
    let item_b = store.create().unwrap();
    let item_c = store.create().unwrap();

    let listed: Vec<_> = store.list().unwrap().iter().map(|item| item.id()).collect();
    assert_eq!(listed, vec![item_a.id(), item_b.id(), item_c.id()]);
}

#[test]
fn list_is_idempotent_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    store.create().unwrap();
    store.create().unwrap();

    let first = store.list().unwrap();
    let second = store.list().unwrap();
    assert_eq!(first, second);
}

#[test]
fn delete_removes_item_and_shrinks_collection_by_one() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let item_a = store.create().unwrap();
    let item_b = store.create().unwrap();
    let item_c = store.create().unwrap();
    assert_eq!(store.count().unwrap(), 3);

    store.delete(item_b.id()).unwrap();

    let listed: Vec<_> = store.list().unwrap().iter().map(|item| item.id()).collect();
    assert_eq!(listed, vec![item_a.id(), item_c.id()]);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn delete_missing_id_fails_and_leaves_collection_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let item_a = store.create().unwrap();
    let item_b = store.create().unwrap();
    let item_c = store.create().unwrap();
    store.delete(item_b.id()).unwrap();

    let err = store.delete(item_b.id()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == item_b.id()));

    let listed: Vec<_> = store.list().unwrap().iter().map(|item| item.id()).collect();
    assert_eq!(listed, vec![item_a.id(), item_c.id()]);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn insertion_order_is_stable_across_deletes() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    let item_a = store.create().unwrap();
    let item_b = store.create().unwrap();
    store.delete(item_b.id()).unwrap();
    let item_c = store.create().unwrap();

    let listed: Vec<_> = store.list().unwrap().iter().map(|item| item.id()).collect();
    assert_eq!(listed, vec![item_a.id(), item_c.id()]);
}

#[test]
fn count_agrees_with_list_length() {
    let conn = open_db_in_memory().unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());

    assert_eq!(store.count().unwrap(), 0);

    for _ in 0..4 {
        store.create().unwrap();
    }

    assert_eq!(store.count().unwrap(), store.list().unwrap().len() as u64);
}

#[test]
fn items_survive_reopening_a_file_backed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clueless.db");

    let conn = open_db(&path).unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());
    let created = store.create().unwrap();
    drop(store);
    drop(conn);

    let conn = open_db(&path).unwrap();
    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn corrupt_persisted_uuid_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO items (id, timestamp) VALUES ('not-a-uuid', 1700000000000);",
        [],
    )
    .unwrap();

    let store = ItemStore::new(SqliteItemRepository::try_new(&conn).unwrap());
    let err = store.list().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("not-a-uuid")));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_items_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("items"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_items_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE items (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "items",
            column: "timestamp"
        })
    ));
}
