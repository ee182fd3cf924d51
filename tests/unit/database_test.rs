//! Unit tests for the tabstore database layer (connection + migrations).

use tabstore::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use tabstore::database::Database;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_tabs_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='tabs'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "Table 'tabs' should exist after migrations");
}

#[test]
fn test_migrations_create_position_index() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name='idx_tabs_position'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "Index 'idx_tabs_position' should exist after migrations");
}

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let dir = tempfile::TempDir::new().expect("tempdir failed");
    let path = dir.path().join("tabs.db");

    {
        let _db = Database::open(&path).expect("first open failed");
    }
    // Reopening runs migrations again; must not fail or bump the version.
    let db = Database::open(&path).expect("second open failed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}
