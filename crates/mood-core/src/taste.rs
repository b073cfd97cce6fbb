//! Mapping from food taste to the mood event it triggers.

use mood_types::{EventTypeId, TasteQuality};

/// The event a bite of food with the given taste starts.
pub const fn taste_event(quality: TasteQuality) -> EventTypeId {
    match quality {
        TasteQuality::VomitInducing => EventTypeId::HadBiteHorribleFood,
        TasteQuality::VeryBad => EventTypeId::HadBiteVeryBadFood,
        TasteQuality::Bad => EventTypeId::HadBiteBadFood,
        TasteQuality::Good => EventTypeId::HadBiteGoodFood,
        TasteQuality::VeryGood => EventTypeId::HadBiteVeryGoodFood,
        TasteQuality::Euphoric => EventTypeId::HadBiteWonderfulFood,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::catalog::EventCatalog;

    #[test]
    fn every_taste_maps_to_a_distinct_event() {
        let events: BTreeSet<EventTypeId> =
            TasteQuality::ALL.into_iter().map(taste_event).collect();
        assert_eq!(events.len(), TasteQuality::ALL.len());
    }

    #[test]
    fn shift_sign_follows_taste() {
        let catalog = EventCatalog::builtin();
        for quality in TasteQuality::ALL {
            let shift = catalog.lookup(taste_event(quality)).map(|p| p.shift);
            let good = matches!(
                quality,
                TasteQuality::Good | TasteQuality::VeryGood | TasteQuality::Euphoric
            );
            assert_eq!(shift.is_some_and(|s| s > 0), good, "{quality:?}");
        }
    }
}
