//! Key-value persistence for tab records.
//!
//! Stores each [`TabRecord`] as its encoded JSON document in SQLite,
//! addressed by [`TabRecord::key`]. The store never interprets the
//! document beyond decode; the record itself owns the wire format.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use crate::database::Database;
use crate::types::errors::TabStoreError;
use crate::types::tab::TabRecord;

/// Trait defining tab persistence operations.
pub trait TabDataStoreTrait {
    fn save_tab(&self, record: &TabRecord) -> Result<(), TabStoreError>;
    fn get_tab(&self, key: &str) -> Result<Option<TabRecord>, TabStoreError>;
    fn get_all_tabs(&self) -> Result<Vec<TabRecord>, TabStoreError>;
    fn delete_tab(&self, key: &str) -> Result<(), TabStoreError>;
    fn clear(&self) -> Result<(), TabStoreError>;
    fn tab_count(&self) -> usize;
}

/// SQLite-backed tab data store.
pub struct TabDataStore {
    db: Arc<Database>,
}

impl TabDataStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Next insertion-order position for a new key. Saving an existing key
    /// keeps its original position.
    fn next_position(&self) -> Result<i64, TabStoreError> {
        self.db
            .connection()
            .query_row("SELECT COALESCE(MAX(position), 0) + 1 FROM tabs", [], |row| {
                row.get(0)
            })
            .map_err(|e| TabStoreError::DatabaseError(e.to_string()))
    }
}

impl TabDataStoreTrait for TabDataStore {
    /// Encodes the record and upserts it under its key.
    ///
    /// A record whose `id` is empty cannot be addressed later and is rejected.
    fn save_tab(&self, record: &TabRecord) -> Result<(), TabStoreError> {
        if record.key().is_empty() {
            return Err(TabStoreError::EmptyKey);
        }

        let document = record.encode()?;
        let position = self.next_position()?;

        self.db
            .connection()
            .execute(
                "INSERT INTO tabs (key, document, position, updated_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(key) DO UPDATE SET document = excluded.document,
                                                updated_at = excluded.updated_at",
                params![record.key(), document, position, Self::now()],
            )
            .map_err(|e| TabStoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Fetches and decodes the record stored under `key`, if any.
    fn get_tab(&self, key: &str) -> Result<Option<TabRecord>, TabStoreError> {
        let result = self.db.connection().query_row(
            "SELECT document FROM tabs WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(document) => {
                let mut record = TabRecord::new();
                record.decode(&document)?;
                Ok(Some(record))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(TabStoreError::DatabaseError(e.to_string())),
        }
    }

    /// Returns all stored records in insertion order.
    fn get_all_tabs(&self) -> Result<Vec<TabRecord>, TabStoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT document FROM tabs ORDER BY position ASC")
            .map_err(|e| TabStoreError::DatabaseError(e.to_string()))?;

        let documents = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| TabStoreError::DatabaseError(e.to_string()))?;

        let mut records = Vec::new();
        for document in documents {
            let document = document.map_err(|e| TabStoreError::DatabaseError(e.to_string()))?;
            let mut record = TabRecord::new();
            record.decode(&document)?;
            records.push(record);
        }
        Ok(records)
    }

    /// Removes the record stored under `key`. Deleting an absent key is a no-op.
    fn delete_tab(&self, key: &str) -> Result<(), TabStoreError> {
        self.db
            .connection()
            .execute("DELETE FROM tabs WHERE key = ?1", params![key])
            .map_err(|e| TabStoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Removes all stored records.
    fn clear(&self) -> Result<(), TabStoreError> {
        self.db
            .connection()
            .execute("DELETE FROM tabs", [])
            .map_err(|e| TabStoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Number of stored records.
    fn tab_count(&self) -> usize {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM tabs", [], |row| row.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}
