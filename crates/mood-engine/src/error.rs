//! Error types for the mood engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and the demo run.

use mood_core::{ConfigError, RosterError};
use mood_protocol::EncodeError;

/// Top-level error for the mood engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or catalog construction failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Tracker activation failed.
    #[error("roster error: {source}")]
    Roster {
        /// The underlying roster error.
        #[from]
        source: RosterError,
    },

    /// A client frame could not be encoded.
    #[error("encode error: {source}")]
    Encode {
        /// The underlying encode error.
        #[from]
        source: EncodeError,
    },

    /// The category set failed its startup sanity check.
    #[error("mood category set is too small")]
    InvalidCategories,

    /// A client task panicked or was cancelled.
    #[error("client task error: {message}")]
    Client {
        /// Description of the task failure.
        message: String,
    },
}
