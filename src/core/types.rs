use serde::Serialize;
use std::fmt;

/// Opaque document identifier, unique within a collection.
///
/// The remote store orders documents by this key, which keeps pagination
/// stable while earlier pages are being deleted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Outcome of purging a single collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    /// Logical name from the configuration.
    pub name: String,
    /// Collection in the remote store.
    pub collection: String,
    /// Documents deleted from this collection.
    pub deleted: usize,
    /// True when the collection ran out of documents before the limit did.
    pub exhausted: bool,
}

/// Outcome of a whole purge run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub total_deleted: usize,
    /// Per-collection breakdown, in processing order. Collections skipped
    /// because the global limit was already reached do not appear.
    pub collections: Vec<CollectionReport>,
}
