// ============================================================================
// DocPurge Library
// ============================================================================

pub mod config;
pub mod core;
pub mod purge;
pub mod store;
pub mod web;

// Re-export main types for convenience
pub use crate::config::{CollectionTarget, Config, FirestoreConfig, PurgeConfig, ServerConfig};
pub use crate::core::{CollectionReport, DocumentId, PurgeError, Result, RunReport, StoreError};
pub use crate::purge::{MAX_BATCH_SIZE, delete_up_to};
pub use crate::store::{DocumentStore, FirestoreStore, InMemoryStore};
