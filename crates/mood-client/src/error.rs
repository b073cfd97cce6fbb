//! Error types for the client receive path.

use mood_protocol::{DecodeError, MessageKind};

/// Errors raised while applying an inbound frame.
///
/// A failed frame is dropped whole; the mirror state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The frame could not be decoded.
    #[error("malformed mood frame: {source}")]
    Decode {
        /// The underlying decode error.
        #[from]
        source: DecodeError,
    },

    /// The frame decoded to a message clients never receive.
    #[error("unexpected {0:?} message on the client")]
    Unexpected(MessageKind),
}
