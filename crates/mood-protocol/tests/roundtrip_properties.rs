//! Property-based tests for the frame codec.
//!
//! Any message the server can produce must decode to itself, and any
//! strict prefix of a valid frame must be rejected rather than partially
//! applied.

#![allow(clippy::arithmetic_side_effects)]

use mood_protocol::{DecodeError, DeltaNotifier, FullResync, MoodMessage};
use mood_types::{Category, EventTypeId};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_type_id() -> impl Strategy<Value = EventTypeId> {
    prop::sample::select(EventTypeId::ALL.to_vec())
}

fn arb_message() -> impl Strategy<Value = MoodMessage> {
    prop_oneof![
        (arb_category(), prop::collection::vec(arb_type_id(), 0..32)).prop_map(
            |(category, active_type_ids)| MoodMessage::Resync(FullResync {
                category,
                active_type_ids,
            })
        ),
        any::<i32>().prop_map(|shift| MoodMessage::Notifier(DeltaNotifier { shift })),
        Just(MoodMessage::SyncRequest),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn decode_inverts_encode(message in arb_message()) {
        let bytes = message.to_bytes();
        prop_assert!(bytes.is_ok());
        let bytes = bytes.unwrap_or_default();
        prop_assert_eq!(MoodMessage::from_bytes(&bytes), Ok(message));
    }

    #[test]
    fn strict_prefixes_are_rejected(message in arb_message(), cut in any::<prop::sample::Index>()) {
        let bytes = message.to_bytes().unwrap_or_default();
        let len = cut.index(bytes.len());
        let prefix = bytes.get(..len).unwrap_or_default();
        let result = MoodMessage::from_bytes(prefix);
        let is_truncated = matches!(result, Err(DecodeError::Truncated { .. }));
        prop_assert!(is_truncated);
    }

    #[test]
    fn resync_length_matches_count(ids in prop::collection::vec(arb_type_id(), 0..64)) {
        let message = MoodMessage::Resync(FullResync {
            category: Category::Neutral,
            active_type_ids: ids.clone(),
        });
        let bytes = message.to_bytes().unwrap_or_default();
        // kind + category + count + one i32 per id
        prop_assert_eq!(bytes.len(), 4 * (3 + ids.len()));
    }
}
