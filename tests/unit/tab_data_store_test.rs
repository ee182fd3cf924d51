//! Unit tests for the SQLite-backed tab data store.

use std::sync::Arc;

use tabstore::database::Database;
use tabstore::store::{TabDataStore, TabDataStoreTrait};
use tabstore::types::errors::TabStoreError;
use tabstore::types::tab::TabRecord;

fn in_memory_store() -> TabDataStore {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    TabDataStore::new(Arc::new(db))
}

fn record(id: &str, url: &str) -> TabRecord {
    TabRecord {
        id: id.to_string(),
        title: format!("Tab {}", id),
        current_url: url.to_string(),
        can_go_back: true,
        can_go_forward: false,
    }
}

#[test]
fn test_save_and_get_round_trip() {
    let store = in_memory_store();
    let tab = record("t1", "https://example.com");

    store.save_tab(&tab).unwrap();
    let restored = store.get_tab("t1").unwrap().expect("tab should exist");
    assert_eq!(restored, tab);
}

#[test]
fn test_get_absent_key_returns_none() {
    let store = in_memory_store();
    assert!(store.get_tab("missing").unwrap().is_none());
}

#[test]
fn test_save_overwrites_existing_key() {
    let store = in_memory_store();
    store.save_tab(&record("t1", "https://old.example")).unwrap();

    let mut updated = record("t1", "https://new.example");
    updated.can_go_forward = true;
    store.save_tab(&updated).unwrap();

    assert_eq!(store.tab_count(), 1);
    let restored = store.get_tab("t1").unwrap().unwrap();
    assert_eq!(restored.current_url, "https://new.example");
    assert!(restored.can_go_forward);
}

#[test]
fn test_save_empty_key_is_rejected() {
    let store = in_memory_store();
    let result = store.save_tab(&TabRecord::new());
    assert!(matches!(result, Err(TabStoreError::EmptyKey)));
    assert_eq!(store.tab_count(), 0);
}

#[test]
fn test_get_all_tabs_preserves_insertion_order() {
    let store = in_memory_store();
    store.save_tab(&record("a", "https://a.example")).unwrap();
    store.save_tab(&record("b", "https://b.example")).unwrap();
    store.save_tab(&record("c", "https://c.example")).unwrap();

    // Overwriting an early tab must not move it to the end.
    store.save_tab(&record("a", "https://a2.example")).unwrap();

    let ids: Vec<String> = store
        .get_all_tabs()
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_delete_tab() {
    let store = in_memory_store();
    store.save_tab(&record("t1", "https://example.com")).unwrap();

    store.delete_tab("t1").unwrap();
    assert!(store.get_tab("t1").unwrap().is_none());
    assert_eq!(store.tab_count(), 0);
}

#[test]
fn test_delete_absent_key_is_noop() {
    let store = in_memory_store();
    store.save_tab(&record("t1", "https://example.com")).unwrap();

    store.delete_tab("missing").unwrap();
    assert_eq!(store.tab_count(), 1);
}

#[test]
fn test_clear_removes_everything() {
    let store = in_memory_store();
    store.save_tab(&record("t1", "https://a.example")).unwrap();
    store.save_tab(&record("t2", "https://b.example")).unwrap();

    store.clear().unwrap();
    assert_eq!(store.tab_count(), 0);
    assert!(store.get_all_tabs().unwrap().is_empty());
}

#[test]
fn test_tabs_survive_database_reopen() {
    let dir = tempfile::TempDir::new().expect("tempdir failed");
    let path = dir.path().join("tabs.db");
    let tab = record("t1", "https://example.com");

    {
        let db = Database::open(&path).expect("open failed");
        let store = TabDataStore::new(Arc::new(db));
        store.save_tab(&tab).unwrap();
    }

    let db = Database::open(&path).expect("reopen failed");
    let store = TabDataStore::new(Arc::new(db));
    let restored = store.get_tab("t1").unwrap().expect("tab should persist");
    assert_eq!(restored, tab);
}
