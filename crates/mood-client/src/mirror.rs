//! Client-side mirror of one tracker's mood.
//!
//! The mirror is purely reactive. It holds no timers and changes state only
//! when a frame arrives. Full resyncs are authoritative and idempotent:
//! applying the same resync twice leaves the display exactly as after the
//! first. Delta notifiers are decoded and logged but otherwise ignored.

use std::sync::Arc;

use mood_core::{EventCatalog, display_lines};
use mood_protocol::{DeltaNotifier, EncodeError, FullResync, MessageKind, MoodMessage};
use mood_types::Category;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::sink::DisplaySink;

/// Chat line printed when the category improves.
pub const MOOD_BETTER: &str = "My mood gets better.";

/// Chat line printed when the category worsens.
pub const MOOD_WORSE: &str = "My mood gets worse.";

/// Receive path for one observed tracker.
#[derive(Debug)]
pub struct MoodMirror<S> {
    catalog: Arc<EventCatalog>,
    last_known_category: Option<Category>,
    sink: S,
}

impl<S: DisplaySink> MoodMirror<S> {
    /// Create a mirror that has not seen any resync yet.
    pub const fn new(catalog: Arc<EventCatalog>, sink: S) -> Self {
        Self {
            catalog,
            last_known_category: None,
            sink,
        }
    }

    /// The frame a client sends once on connect to get an immediate resync.
    pub fn sync_request_frame() -> Result<Vec<u8>, EncodeError> {
        MoodMessage::SyncRequest.to_bytes()
    }

    /// Category from the latest resync, if one arrived.
    pub const fn last_known_category(&self) -> Option<Category> {
        self.last_known_category
    }

    /// Decode and apply one inbound frame.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] for a malformed frame and
    /// [`ClientError::Unexpected`] for a server-bound message. State is
    /// untouched in both cases.
    pub fn receive(&mut self, frame: &[u8]) -> Result<(), ClientError> {
        let message = MoodMessage::from_bytes(frame).inspect_err(|e| {
            warn!(error = %e, len = frame.len(), "Dropping malformed mood frame");
        })?;

        match message {
            MoodMessage::Resync(resync) => {
                self.apply_resync(&resync);
                Ok(())
            }
            MoodMessage::Notifier(notifier) => {
                self.on_notifier(notifier);
                Ok(())
            }
            MoodMessage::SyncRequest => {
                warn!("Client received a sync request, ignoring");
                Err(ClientError::Unexpected(MessageKind::SyncRequest))
            }
        }
    }

    /// Apply an authoritative snapshot.
    pub fn apply_resync(&mut self, resync: &FullResync) {
        if let Some(previous) = self.last_known_category {
            if resync.category > previous {
                self.sink.chat_line(MOOD_BETTER);
            } else if resync.category < previous {
                self.sink.chat_line(MOOD_WORSE);
            }
        }
        self.last_known_category = Some(resync.category);

        let lines = display_lines(&self.catalog, &resync.active_type_ids);
        debug!(
            category = ?resync.category,
            events = resync.active_type_ids.len(),
            "Applied mood resync"
        );
        self.sink.show_mood(resync.category, &lines);
    }

    /// Handle a change notice. Nothing depends on it.
    pub fn on_notifier(&mut self, notifier: DeltaNotifier) {
        debug!(shift = notifier.shift, "Mood shift notice");
    }

    /// The display sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the display sink.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the mirror, returning the last known category and sink.
    pub fn into_parts(self) -> (Option<Category>, S) {
        (self.last_known_category, self.sink)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mood_core::EventPrototype;
    use mood_types::EventTypeId;

    use super::*;
    use crate::sink::MoodIndicator;

    const A: EventTypeId = EventTypeId::HadBiteGoodFood;
    const B: EventTypeId = EventTypeId::HadBiteBadFood;
    const C: EventTypeId = EventTypeId::HadBiteVeryGoodFood;

    fn mirror() -> MoodMirror<MoodIndicator> {
        let catalog = EventCatalog::from_prototypes([
            (A, EventPrototype::new("Ate food", 10, 10.0)),
            (B, EventPrototype::new("Smoked", -10, 10.0)),
            (C, EventPrototype::new("Slept", 20, 10.0)),
        ])
        .unwrap();
        MoodMirror::new(Arc::new(catalog), MoodIndicator::new())
    }

    fn resync(category: Category, ids: &[EventTypeId]) -> FullResync {
        FullResync {
            category,
            active_type_ids: ids.to_vec(),
        }
    }

    #[test]
    fn first_resync_prints_no_chat() {
        let mut mirror = mirror();
        mirror.apply_resync(&resync(Category::Happy, &[A]));
        assert!(mirror.sink().chat().is_empty());
        assert_eq!(mirror.last_known_category(), Some(Category::Happy));
        assert_eq!(mirror.sink().category(), Some(Category::Happy));
    }

    #[test]
    fn category_changes_print_direction() {
        let mut mirror = mirror();
        mirror.apply_resync(&resync(Category::Neutral, &[]));
        mirror.apply_resync(&resync(Category::SlightlyHappy, &[A]));
        mirror.apply_resync(&resync(Category::Unhappy, &[B]));
        assert_eq!(mirror.sink().chat(), [MOOD_BETTER, MOOD_WORSE]);
    }

    #[test]
    fn resync_is_idempotent() {
        let mut mirror = mirror();
        let snapshot = resync(Category::Happy, &[A, B, A, A, C]);
        mirror.apply_resync(&snapshot);
        let after_first = mirror.sink().clone();

        mirror.apply_resync(&snapshot);
        assert_eq!(mirror.sink(), &after_first);
        assert_eq!(
            mirror.sink().lines(),
            ["Ate food (3x)", "Smoked", "Slept"]
        );
    }

    #[test]
    fn notifier_changes_nothing() {
        let mut mirror = mirror();
        let frame = MoodMessage::Notifier(DeltaNotifier { shift: 50 })
            .to_bytes()
            .unwrap();
        mirror.receive(&frame).unwrap();
        assert_eq!(mirror.last_known_category(), None);
        assert_eq!(mirror.sink(), &MoodIndicator::new());
    }

    #[test]
    fn malformed_frame_is_dropped() {
        let mut mirror = mirror();
        mirror.apply_resync(&resync(Category::Happy, &[A]));
        let before = mirror.sink().clone();

        let mut frame = MoodMessage::Resync(resync(Category::Euphoric, &[C]))
            .to_bytes()
            .unwrap();
        frame.truncate(frame.len().saturating_sub(2));

        assert!(matches!(
            mirror.receive(&frame),
            Err(ClientError::Decode { .. })
        ));
        assert_eq!(mirror.sink(), &before);
        assert_eq!(mirror.last_known_category(), Some(Category::Happy));
    }

    #[test]
    fn sync_request_is_unexpected() {
        let mut mirror = mirror();
        let frame = MoodMirror::<MoodIndicator>::sync_request_frame().unwrap();
        assert!(matches!(
            mirror.receive(&frame),
            Err(ClientError::Unexpected(_))
        ));
    }
}
