use super::DocumentStore;
use crate::core::{DocumentId, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

/// In-memory store used by tests and local dry runs.
///
/// Each collection is a sorted id set, which gives the same ordering
/// guarantee the remote store provides.
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, BTreeSet<DocumentId>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `count` documents with zero-padded ids (`doc-000000`, ...).
    pub async fn seed(&self, collection: &str, count: usize) {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();
        for i in 0..count {
            documents.insert(DocumentId::new(format!("doc-{i:06}")));
        }
    }

    pub async fn insert(&self, collection: &str, id: DocumentId) {
        let mut collections = self.collections.write().await;
        collections.entry(collection.to_string()).or_default().insert(id);
    }

    /// Number of documents currently stored in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, BTreeSet::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn list_ids(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<DocumentId>, StoreError> {
        let collections = self.collections.read().await;
        let ids = collections
            .get(collection)
            .map(|documents| documents.iter().take(limit).cloned().collect())
            .unwrap_or_default();
        Ok(ids)
    }

    async fn delete_batch(
        &self,
        collection: &str,
        ids: &[DocumentId],
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        if let Some(documents) = collections.get_mut(collection) {
            for id in ids {
                // Absent ids count as deleted.
                documents.remove(id);
            }
        }
        Ok(())
    }
}
