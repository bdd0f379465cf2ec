//! Session error type.

use std::path::PathBuf;

use thiserror::Error;

use prefs_store::StoreError;

/// Errors surfaced by [`PreferencesSession`](crate::PreferencesSession).
///
/// Loading never produces one of these: a missing or corrupt file degrades
/// to defaults plus a [`LoadWarning`](crate::LoadWarning). Only a failed
/// write is reported as an error, and even then the in-memory snapshot is
/// retained so the caller can retry.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to save preferences to {path}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;
