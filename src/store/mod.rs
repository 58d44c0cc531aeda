pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::InMemoryStore;

use crate::core::{DocumentId, StoreError};
use async_trait::async_trait;

/// Remote document store, reduced to the two calls a purge needs.
///
/// Implementations must guarantee:
/// - `list_ids` returns ids in document-identity order, so a caller that
///   deletes what it fetched never sees the same id twice;
/// - `delete_batch` is atomic: either the whole batch is deleted or the
///   call fails;
/// - deleting an id that is already absent is a successful no-op.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch up to `limit` document ids from `collection`, ordered by
    /// document identity.
    async fn list_ids(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<DocumentId>, StoreError>;

    /// Delete every id in `ids` from `collection` in one atomic operation.
    async fn delete_batch(
        &self,
        collection: &str,
        ids: &[DocumentId],
    ) -> Result<(), StoreError>;
}
