//! Error types for feedback storage
//!
//! Validation problems are not errors in this sense: they are returned as
//! data (`validate::FieldError`) so every failing field can be reported.

use thiserror::Error;

/// Failures while reading or writing the persisted feedback list.
///
/// None of these are fatal. Read failures are recovered by substituting an
/// empty list; write failures are logged and reported to the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No storage slot is available (no window, storage disabled, private mode).
    #[error("storage is unavailable")]
    Unavailable,

    /// The backend refused a read.
    #[error("failed to read '{key}': {message}")]
    Read {
        /// Storage key being read.
        key: String,
        /// Backend-provided description.
        message: String,
    },

    /// The backend refused a write (quota exceeded, security error).
    #[error("failed to write '{key}': {message}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Backend-provided description.
        message: String,
    },

    /// The stored value is not a valid feedback list.
    #[error("stored feedback is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The list could not be encoded.
    #[error("failed to encode feedback: {0}")]
    Encode(#[source] serde_json::Error),
}
