use thiserror::Error;

/// Errors from the subscriber store.
///
/// A toggle that cannot be durably recorded must never look successful, so
/// these escalate to the command surface instead of being absorbed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
