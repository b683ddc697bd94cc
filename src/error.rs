use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced at the repository and facade boundary.
///
/// Every variant is recoverable. Validation and not-found outcomes leave the
/// collections untouched; a store failure means the durable write is behind
/// the in-memory state, which is retained.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was blank, or a plan was saved with no exercises.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The referenced id is no longer in the collection.
    #[error("no entry with id {0}")]
    NotFound(String),

    /// The durable write failed; the in-memory collection keeps the change.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
