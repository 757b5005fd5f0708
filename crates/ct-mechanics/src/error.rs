//! Error types for encounter sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by [`EncounterSession`](crate::EncounterSession).
///
/// The controller itself never fails; these cover calls made in the wrong
/// lifecycle phase and editing errors on the building encounter.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An action was dispatched with no encounter running.
    #[error("no encounter is running")]
    NotRunning,

    /// A run was requested while one is already in progress.
    #[error("an encounter is already running")]
    AlreadyRunning,

    /// Editing the building encounter failed.
    #[error("{0}")]
    Core(#[from] ct_core::CoreError),
}
