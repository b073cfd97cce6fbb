//! Error types for the sync protocol.
//!
//! Decoding failures are surfaced to the transport layer as-is; nothing in
//! this crate attempts partial recovery from a malformed frame.

use mood_types::ObserverId;

/// Errors produced while decoding a frame or message body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before a complete value could be read.
    #[error("truncated input: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        /// Byte offset of the read that failed.
        offset: usize,
        /// Bytes required by the read.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },

    /// A length prefix was negative.
    #[error("negative array length: {0}")]
    NegativeLength(i32),

    /// A category code does not name any known category.
    #[error("unknown category code: {0}")]
    UnknownCategory(i32),

    /// An event type code does not name any known event type.
    #[error("unknown event type code: {0}")]
    UnknownEventType(i32),

    /// A frame header carried an unknown message kind.
    #[error("unknown message kind: {0}")]
    UnknownKind(i32),

    /// Bytes were left over after the frame body.
    #[error("{0} trailing bytes after frame body")]
    TrailingBytes(usize),
}

/// Errors produced while encoding a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// An array is too long for its `i32` length prefix.
    #[error("array length {0} does not fit in an i32 prefix")]
    LengthOverflow(usize),
}

/// Errors reported by a [`Transport`](crate::channel::Transport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The observer's connection is gone.
    #[error("observer {0} is disconnected")]
    Disconnected(ObserverId),

    /// The message could not be encoded for sending.
    #[error("encode failed: {source}")]
    Encode {
        /// The underlying encode error.
        #[from]
        source: EncodeError,
    },
}
