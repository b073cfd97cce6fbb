//! Outbound capabilities a tracker is given instead of a network object.
//!
//! A tracker only ever needs to push two message kinds at its owning
//! observer, so it depends on the narrow [`ObserverChannel`] trait. The
//! [`ConnectionChannel`] adapter frames and encodes those messages and
//! hands the bytes to a [`Transport`], which is the host's connection
//! layer. Sends are one-way: a transport failure is logged here and never
//! reaches the tracker.

use mood_types::ObserverId;
use tracing::{trace, warn};

use crate::error::TransportError;
use crate::message::{DeltaNotifier, FullResync, MoodMessage};

/// Capability to push messages to the observer that owns a tracker.
pub trait ObserverChannel {
    /// Send an authoritative snapshot.
    fn send_resync(&mut self, message: &FullResync);

    /// Send a best-effort change notice.
    fn send_notifier(&mut self, message: &DeltaNotifier);
}

impl<C: ObserverChannel + ?Sized> ObserverChannel for Box<C> {
    fn send_resync(&mut self, message: &FullResync) {
        (**self).send_resync(message);
    }

    fn send_notifier(&mut self, message: &DeltaNotifier) {
        (**self).send_notifier(message);
    }
}

/// Byte-level connection layer supplied by the host.
///
/// Implementations must not block. Delivery is expected to be reliable and
/// ordered per observer for resyncs to stay authoritative; notifiers
/// tolerate loss.
pub trait Transport {
    /// Queue `bytes` for delivery to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Disconnected`] when the observer is gone.
    fn send(&self, observer: ObserverId, bytes: Vec<u8>) -> Result<(), TransportError>;
}

/// [`ObserverChannel`] that frames messages and sends them over a
/// [`Transport`] to one observer.
#[derive(Debug, Clone)]
pub struct ConnectionChannel<T> {
    observer: ObserverId,
    transport: T,
}

impl<T: Transport> ConnectionChannel<T> {
    /// Bind a transport to one observer.
    pub const fn new(observer: ObserverId, transport: T) -> Self {
        Self {
            observer,
            transport,
        }
    }

    /// The observer this channel delivers to.
    pub const fn observer(&self) -> ObserverId {
        self.observer
    }

    /// Encode and send one message, logging any failure.
    fn deliver(&self, message: &MoodMessage) {
        let result = message
            .to_bytes()
            .map_err(TransportError::from)
            .and_then(|bytes| {
                trace!(observer = %self.observer, kind = ?message.kind(), len = bytes.len(), "Sending frame");
                self.transport.send(self.observer, bytes)
            });
        if let Err(e) = result {
            warn!(observer = %self.observer, kind = ?message.kind(), error = %e, "Failed to send mood message");
        }
    }
}

impl<T: Transport> ObserverChannel for ConnectionChannel<T> {
    fn send_resync(&mut self, message: &FullResync) {
        self.deliver(&MoodMessage::Resync(message.clone()));
    }

    fn send_notifier(&mut self, message: &DeltaNotifier) {
        self.deliver(&MoodMessage::Notifier(*message));
    }
}

/// An [`ObserverChannel`] that keeps every message in memory.
///
/// Used by tests and by hosts that want to inspect traffic without a
/// connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingChannel {
    /// Every message sent, oldest first.
    pub messages: Vec<MoodMessage>,
}

impl RecordingChannel {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// All resyncs sent, oldest first.
    pub fn resyncs(&self) -> Vec<&FullResync> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                MoodMessage::Resync(resync) => Some(resync),
                _ => None,
            })
            .collect()
    }

    /// All notifier shifts sent, oldest first.
    pub fn notifier_shifts(&self) -> Vec<i32> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                MoodMessage::Notifier(notifier) => Some(notifier.shift),
                _ => None,
            })
            .collect()
    }

    /// The most recent resync, if any.
    pub fn last_resync(&self) -> Option<&FullResync> {
        self.messages.iter().rev().find_map(|m| match m {
            MoodMessage::Resync(resync) => Some(resync),
            _ => None,
        })
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl ObserverChannel for RecordingChannel {
    fn send_resync(&mut self, message: &FullResync) {
        self.messages.push(MoodMessage::Resync(message.clone()));
    }

    fn send_notifier(&mut self, message: &DeltaNotifier) {
        self.messages.push(MoodMessage::Notifier(*message));
    }
}
