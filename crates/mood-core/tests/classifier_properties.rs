//! Property-based tests for mood classification and tracker aggregation.

#![allow(clippy::arithmetic_side_effects, clippy::unwrap_used)]

use std::sync::Arc;

use mood_core::{EventCatalog, EventPrototype, MoodTracker, classify};
use mood_protocol::RecordingChannel;
use mood_types::{Category, EventTypeId};
use proptest::prelude::*;

/// Straightforward reference model using i128 so nothing can overflow.
fn reference(sum: i64, neurocity: i32) -> i32 {
    let n = i128::from(neurocity.max(1));
    let s = i128::from(sum);
    let magnitude = (s.abs() + n - 1) / n;
    let signed = magnitude * s.signum();
    i32::try_from(signed.clamp(-4, 4)).unwrap_or_default()
}

proptest! {
    #[test]
    fn classify_matches_reference(sum in any::<i64>(), neurocity in any::<i32>()) {
        prop_assert_eq!(classify(sum, neurocity).code(), reference(sum, neurocity));
    }

    #[test]
    fn classify_is_monotonic(a in -5_000_i64..5_000, b in -5_000_i64..5_000, neurocity in 1_i32..500) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo, neurocity) <= classify(hi, neurocity));
    }

    #[test]
    fn sign_of_category_follows_sum(sum in any::<i64>(), neurocity in any::<i32>()) {
        let category = classify(sum, neurocity);
        prop_assert_eq!(category.code().signum(), i32::try_from(sum.signum()).unwrap_or_default());
    }

    #[test]
    fn tracker_category_is_function_of_active_shifts(
        shifts in prop::collection::vec(-300_i32..300, 0..12),
        neurocity in -10_i32..400,
    ) {
        let prototypes = EventTypeId::ALL
            .into_iter()
            .zip(shifts.iter().copied().chain(std::iter::repeat(0)))
            .map(|(id, shift)| (id, EventPrototype::new(id.as_str(), shift, 10.0)));
        let catalog = EventCatalog::from_prototypes(prototypes).unwrap_or_default();
        let mut tracker = MoodTracker::with_neurocity(Arc::new(catalog), RecordingChannel::new(), neurocity);

        let mut expected_sum = 0_i64;
        for (index, _) in shifts.iter().enumerate() {
            let Some(id) = EventTypeId::ALL.get(index % EventTypeId::ALL.len()).copied() else {
                continue;
            };
            tracker.add_event(id);
            expected_sum += i64::from(tracker.catalog().lookup(id).map_or(0, |p| p.shift));
        }

        prop_assert_eq!(tracker.overall_shift_sum(), expected_sum);
        prop_assert_eq!(tracker.overall_category(), classify(expected_sum, tracker.neurocity()));
        let last = tracker.channel().last_resync().map(|r| r.category);
        if shifts.is_empty() {
            prop_assert_eq!(last, None);
        } else {
            prop_assert_eq!(last, Some(tracker.overall_category()));
        }
    }
}

#[test]
fn default_neurocity_single_bite() {
    let mut tracker = MoodTracker::new(Arc::new(EventCatalog::builtin()), RecordingChannel::new());
    tracker.add_event(EventTypeId::HadBiteGoodFood);
    assert_eq!(tracker.overall_category(), Category::SlightlyHappy);
}
