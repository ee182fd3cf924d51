//! Tabstore — persisted browser tab state.
//!
//! A tab's state ([`types::tab::TabRecord`]) is encoded to a fixed-key JSON
//! document and stored in SQLite under the record's key. The record and the
//! store are decoupled: the document travels as a string, so the storage
//! medium can change without touching the wire format.

pub mod database;
pub mod store;
pub mod types;
