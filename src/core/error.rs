use thiserror::Error;

/// Failures reported by the remote document store itself.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote store rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("malformed store response: {0}")]
    Malformed(String),
}

/// Run-level failures of a purge.
///
/// A fetch or delete failure aborts the run; batches committed before the
/// failure stay deleted on the remote store and are not reported back.
#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("failed to fetch documents from '{collection}': {source}")]
    FetchFailed { collection: String, source: StoreError },

    #[error("failed to delete a batch from '{collection}': {source}")]
    DeletionFailed { collection: String, source: StoreError },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = PurgeError> = std::result::Result<T, E>;
