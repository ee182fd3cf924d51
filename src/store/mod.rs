//! Persistence layer for tab records.

pub mod tab_data_store;

pub use tab_data_store::{TabDataStore, TabDataStoreTrait};
