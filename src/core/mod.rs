pub mod error;
pub mod types;

pub use error::{PurgeError, Result, StoreError};
pub use types::{CollectionReport, DocumentId, RunReport};
