use thiserror::Error;

use garoa_store::StoreError;

/// The notification channel rejected or dropped a send.
///
/// Logged and absorbed; there is no retry queue, the next scheduled firing
/// is the retry.
#[derive(Debug, Error)]
#[error("message send failed: {0}")]
pub struct SendError(pub String);

/// Failures surfaced to the command layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A subscription cannot be enabled before a location is set.
    #[error("no location set for this subscriber")]
    NoLocation,

    /// The toggle could not be durably recorded; nothing was scheduled.
    #[error(transparent)]
    Store(#[from] StoreError),
}
