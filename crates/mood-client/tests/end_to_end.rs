//! Server tracker to client mirror over encoded frames.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::sync::Arc;

use mood_client::{MOOD_BETTER, MOOD_WORSE, MoodIndicator, MoodMirror};
use mood_core::{EventCatalog, EventPrototype, MoodTracker};
use mood_protocol::{ConnectionChannel, Transport, TransportError};
use mood_types::{Category, EventTypeId, ObserverId};

/// Frames queued for one client, in send order.
#[derive(Default)]
struct Wire {
    frames: RefCell<Vec<Vec<u8>>>,
}

impl Wire {
    fn drain(&self) -> Vec<Vec<u8>> {
        self.frames.borrow_mut().drain(..).collect()
    }
}

impl Transport for &Wire {
    fn send(&self, _observer: ObserverId, bytes: Vec<u8>) -> Result<(), TransportError> {
        self.frames.borrow_mut().push(bytes);
        Ok(())
    }
}

fn catalog() -> Arc<EventCatalog> {
    Arc::new(
        EventCatalog::from_prototypes([
            (
                EventTypeId::HadBiteGoodFood,
                EventPrototype::new("Ate food", 60, 2.0),
            ),
            (
                EventTypeId::HadBiteBadFood,
                EventPrototype::new("Smoked", -150, 4.0),
            ),
        ])
        .unwrap(),
    )
}

fn deliver(wire: &Wire, mirror: &mut MoodMirror<MoodIndicator>) {
    for frame in wire.drain() {
        mirror.receive(&frame).unwrap();
    }
}

#[test]
fn mirror_follows_tracker_through_lifecycle() {
    let wire = Wire::default();
    let catalog = catalog();
    let mut tracker = MoodTracker::new(
        Arc::clone(&catalog),
        ConnectionChannel::new(ObserverId::new(), &wire),
    );
    let mut mirror = MoodMirror::new(catalog, MoodIndicator::new());

    tracker.send_resync();
    deliver(&wire, &mut mirror);
    assert_eq!(mirror.last_known_category(), Some(Category::Neutral));
    assert_eq!(mirror.sink().examine(), "How I feel:");

    tracker.add_event(EventTypeId::HadBiteGoodFood);
    tracker.add_event(EventTypeId::HadBiteGoodFood);
    deliver(&wire, &mut mirror);
    assert_eq!(mirror.last_known_category(), Some(Category::Happy));
    assert_eq!(mirror.sink().examine(), "How I feel:\nAte food (2x)");

    tracker.add_event(EventTypeId::HadBiteBadFood);
    deliver(&wire, &mut mirror);
    assert_eq!(mirror.last_known_category(), Some(Category::SlightlyUnhappy));

    // Both food events expire; the bad one is left.
    tracker.tick(2.0);
    deliver(&wire, &mut mirror);
    assert_eq!(mirror.last_known_category(), Some(Category::Unhappy));
    assert_eq!(mirror.sink().lines(), ["Smoked"]);

    tracker.tick(2.0);
    deliver(&wire, &mut mirror);
    assert_eq!(mirror.last_known_category(), Some(Category::Neutral));
    assert!(mirror.sink().lines().is_empty());

    assert_eq!(
        mirror.sink().chat(),
        [
            MOOD_BETTER, // neutral -> slightly happy
            MOOD_BETTER, // -> happy
            MOOD_WORSE,  // -> slightly unhappy
            MOOD_WORSE,  // -> unhappy
            MOOD_BETTER, // -> neutral
        ]
    );
}

#[test]
fn every_change_sends_notifier_then_resync() {
    let wire = Wire::default();
    let mut tracker = MoodTracker::new(catalog(), ConnectionChannel::new(ObserverId::new(), &wire));

    tracker.add_event(EventTypeId::HadBiteBadFood);
    let frames = wire.drain();
    let kinds: Vec<i32> = frames
        .iter()
        .filter_map(|f| f.get(..4))
        .map(|head| i32::from_le_bytes(head.try_into().unwrap()))
        .collect();
    assert_eq!(kinds, vec![2, 1]);
}
