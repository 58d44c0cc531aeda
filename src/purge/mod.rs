//! Bounded batch deletion.
//!
//! One procedure does the work: [`delete_up_to`] pages through a collection
//! in document-id order and deletes each page in one atomic call, stopping
//! when the collection is exhausted or the limit is reached. [`run`] drives
//! it across the configured collections under a single global limit. Both
//! entry points (CLI and HTTP) are thin adapters over these two functions.

use crate::config::PurgeConfig;
use crate::core::{CollectionReport, PurgeError, Result, RunReport};
use crate::store::DocumentStore;

/// Upper bound for one atomic delete; the remote store caps operations per
/// transaction at this size.
pub const MAX_BATCH_SIZE: usize = 500;

/// Delete up to `limit` documents from `collection`, one page at a time.
///
/// Pages are fetched in document-id order, so documents deleted by an
/// earlier round are never fetched again. Each page is submitted as one
/// atomic delete. Returns the number of documents deleted, always
/// `<= limit`; a `limit` of zero performs no round trips at all.
///
/// On a failed round trip the run aborts immediately: pages committed before
/// the failure stay deleted, and only the error is reported.
pub async fn delete_up_to(
    store: &dyn DocumentStore,
    collection: &str,
    limit: usize,
) -> Result<usize> {
    let mut deleted = 0;

    while deleted < limit {
        let page_size = MAX_BATCH_SIZE.min(limit - deleted);
        let mut ids = store
            .list_ids(collection, page_size)
            .await
            .map_err(|source| PurgeError::FetchFailed {
                collection: collection.to_string(),
                source,
            })?;
        // The limit is a hard cap even if the store over-delivers.
        ids.truncate(page_size);

        if ids.is_empty() {
            tracing::debug!(collection, "no more documents");
            break;
        }

        store
            .delete_batch(collection, &ids)
            .await
            .map_err(|source| PurgeError::DeletionFailed {
                collection: collection.to_string(),
                source,
            })?;

        deleted += ids.len();
        tracing::info!(collection, batch = ids.len(), deleted, "deleted batch");
    }

    Ok(deleted)
}

/// Purge the configured collections in order, under one global limit.
///
/// Each collection receives whatever is left of `total_limit`; once the
/// limit is consumed, the remaining collections are not queried at all.
pub async fn run(store: &dyn DocumentStore, config: &PurgeConfig) -> Result<RunReport> {
    let mut report = RunReport::default();

    for target in &config.collections {
        if report.total_deleted >= config.total_limit {
            break;
        }
        let remaining = config.total_limit - report.total_deleted;

        tracing::info!(
            name = %target.name,
            collection = %target.collection,
            remaining,
            "purging collection"
        );
        let deleted = delete_up_to(store, &target.collection, remaining).await?;

        report.total_deleted += deleted;
        report.collections.push(CollectionReport {
            name: target.name.clone(),
            collection: target.collection.clone(),
            deleted,
            exhausted: deleted < remaining,
        });
        tracing::info!(
            collection = %target.collection,
            deleted,
            total = report.total_deleted,
            "collection finished"
        );
    }

    Ok(report)
}
