//! Message shapes exchanged between the server tracker and the client.
//!
//! - [`FullResync`] is authoritative and idempotent: applying the latest
//!   one always yields exactly its content, whatever came before.
//! - [`DeltaNotifier`] is best-effort and carries no identity; losing or
//!   reordering notifiers never affects tracked state.
//! - [`MoodMessage::SyncRequest`] flows client to server once on connect.
//!
//! A frame is an `i32` kind followed by the message body.

use mood_types::{Category, EventTypeId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::codec::{NetworkReader, NetworkWriter};
use crate::error::{DecodeError, EncodeError};

/// Authoritative snapshot of one tracker: overall category plus the active
/// event type ids in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FullResync {
    /// Overall mood category.
    pub category: Category,
    /// Active event types, duplicates included, in insertion order.
    pub active_type_ids: Vec<EventTypeId>,
}

impl FullResync {
    /// Write `i32 category; i32 count; i32 type_id[count]`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::LengthOverflow`] if the id list is longer
    /// than an `i32` prefix can express.
    pub fn encode(&self, writer: &mut NetworkWriter) -> Result<(), EncodeError> {
        writer.write_i32(self.category.code());
        writer.write_len(self.active_type_ids.len())?;
        for type_id in &self.active_type_ids {
            writer.write_i32(type_id.code());
        }
        Ok(())
    }

    /// Read a body written by [`FullResync::encode`].
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for truncated input, a negative count, or
    /// an unknown category or event type code.
    pub fn decode(reader: &mut NetworkReader<'_>) -> Result<Self, DecodeError> {
        let raw_category = reader.read_i32()?;
        let category =
            Category::from_code(raw_category).ok_or(DecodeError::UnknownCategory(raw_category))?;

        let count = reader.read_len()?;
        let mut active_type_ids = Vec::with_capacity(count.min(reader.max_i32_elements()));
        for _ in 0..count {
            let raw = reader.read_i32()?;
            let type_id = EventTypeId::from_code(raw).ok_or(DecodeError::UnknownEventType(raw))?;
            active_type_ids.push(type_id);
        }

        Ok(Self {
            category,
            active_type_ids,
        })
    }
}

/// Fire-and-forget notice that the aggregate shift just moved by `shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DeltaNotifier {
    /// Signed shift: positive when an event was added, negated on removal.
    pub shift: i32,
}

impl DeltaNotifier {
    /// Write `i32 shift`.
    pub fn encode(self, writer: &mut NetworkWriter) {
        writer.write_i32(self.shift);
    }

    /// Read a body written by [`DeltaNotifier::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the shift is cut off.
    pub fn decode(reader: &mut NetworkReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            shift: reader.read_i32()?,
        })
    }
}

/// Discriminant written at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MessageKind {
    /// A [`FullResync`] body follows.
    Resync = 1,
    /// A [`DeltaNotifier`] body follows.
    Notifier = 2,
    /// No body follows.
    SyncRequest = 3,
}

impl MessageKind {
    /// The wire code of this kind.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a kind by its wire code.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Resync),
            2 => Some(Self::Notifier),
            3 => Some(Self::SyncRequest),
            _ => None,
        }
    }
}

/// Any message that can travel in a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoodMessage {
    /// Server to client: authoritative snapshot.
    Resync(FullResync),
    /// Server to client: cosmetic change notice.
    Notifier(DeltaNotifier),
    /// Client to server: ask for an immediate resync.
    SyncRequest,
}

impl MoodMessage {
    /// Kind written in this message's frame header.
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Resync(_) => MessageKind::Resync,
            Self::Notifier(_) => MessageKind::Notifier,
            Self::SyncRequest => MessageKind::SyncRequest,
        }
    }

    /// Encode a full frame.
    ///
    /// # Errors
    ///
    /// Propagates [`EncodeError`] from the body encoder.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = NetworkWriter::new();
        writer.write_i32(self.kind().code());
        match self {
            Self::Resync(resync) => resync.encode(&mut writer)?,
            Self::Notifier(notifier) => notifier.encode(&mut writer),
            Self::SyncRequest => {}
        }
        Ok(writer.into_bytes())
    }

    /// Decode a full frame. The frame must be consumed exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for an unknown kind, a malformed body, or
    /// trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = NetworkReader::new(bytes);
        let raw_kind = reader.read_i32()?;
        let kind = MessageKind::from_code(raw_kind).ok_or(DecodeError::UnknownKind(raw_kind))?;
        let message = match kind {
            MessageKind::Resync => Self::Resync(FullResync::decode(&mut reader)?),
            MessageKind::Notifier => Self::Notifier(DeltaNotifier::decode(&mut reader)?),
            MessageKind::SyncRequest => Self::SyncRequest,
        };
        reader.finish()?;
        Ok(message)
    }
}

impl From<FullResync> for MoodMessage {
    fn from(resync: FullResync) -> Self {
        Self::Resync(resync)
    }
}

impl From<DeltaNotifier> for MoodMessage {
    fn from(notifier: DeltaNotifier) -> Self {
        Self::Notifier(notifier)
    }
}
