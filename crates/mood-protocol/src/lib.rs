//! Wire protocol for mirroring a server-side mood tracker on a client.
//!
//! Two server-to-client messages with different guarantees:
//!
//! - **Full resync** ([`FullResync`]): category plus active event type ids.
//!   Authoritative and idempotent; the receiver's state after applying it
//!   is exactly its content.
//! - **Delta notifier** ([`DeltaNotifier`]): a single signed shift.
//!   Best-effort and notify-only.
//!
//! Plus one client-to-server [`MoodMessage::SyncRequest`] issued on
//! connect.
//!
//! # Modules
//!
//! - [`codec`] -- little-endian `i32` writer and reader
//! - [`message`] -- message shapes, frame encode/decode
//! - [`channel`] -- [`ObserverChannel`] and [`Transport`] seams
//! - [`error`] -- decode, encode, and transport errors

pub mod channel;
pub mod codec;
pub mod error;
pub mod message;

// Re-export primary types for convenience.
pub use channel::{ConnectionChannel, ObserverChannel, RecordingChannel, Transport};
pub use codec::{NetworkReader, NetworkWriter};
pub use error::{DecodeError, EncodeError, TransportError};
pub use message::{DeltaNotifier, FullResync, MessageKind, MoodMessage};
