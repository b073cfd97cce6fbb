//! Enumeration types for the mood system.
//!
//! Both [`EventTypeId`] and [`Category`] carry stable `i32` codes. Those
//! codes are what crosses the wire, so variants must never be renumbered or
//! reused for a different meaning.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Event type identifiers
// ---------------------------------------------------------------------------

/// Stable identifier of a class of mood event.
///
/// Every variant should have a prototype in the event catalog. To add an
/// event, append a variant here with the next free code and register its
/// prototype in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum EventTypeId {
    /// Ate something tasty.
    HadBiteGoodFood = 0,
    /// Ate something exquisite.
    HadBiteVeryGoodFood = 1,
    /// Ate something wonderful.
    HadBiteWonderfulFood = 2,
    /// Ate something off-tasting.
    HadBiteBadFood = 3,
    /// Ate something disgusting.
    HadBiteVeryBadFood = 4,
    /// Ate something horrible.
    HadBiteHorribleFood = 5,
}

impl EventTypeId {
    /// Every defined identifier, in code order.
    pub const ALL: [Self; 6] = [
        Self::HadBiteGoodFood,
        Self::HadBiteVeryGoodFood,
        Self::HadBiteWonderfulFood,
        Self::HadBiteBadFood,
        Self::HadBiteVeryBadFood,
        Self::HadBiteHorribleFood,
    ];

    /// The wire code of this identifier.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up an identifier by its wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }

    /// Snake-case name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HadBiteGoodFood => "had_bite_good_food",
            Self::HadBiteVeryGoodFood => "had_bite_very_good_food",
            Self::HadBiteWonderfulFood => "had_bite_wonderful_food",
            Self::HadBiteBadFood => "had_bite_bad_food",
            Self::HadBiteVeryBadFood => "had_bite_very_bad_food",
            Self::HadBiteHorribleFood => "had_bite_horrible_food",
        }
    }
}

impl core::fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mood categories
// ---------------------------------------------------------------------------

/// Discrete, ordered classification of an entity's overall mood.
///
/// The code is the signed distance from [`Category::Neutral`]: negative
/// codes are bad moods, positive codes good ones. Keep the variants ordered
/// by code, worst first. Indicator sprites are selected by [`Category::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Category {
    /// The worst possible mood.
    Suicidal = -4,
    /// Third bad mood.
    VeryUnhappy = -3,
    /// Second bad mood.
    Unhappy = -2,
    /// First bad mood.
    SlightlyUnhappy = -1,
    /// No net mood shift.
    Neutral = 0,
    /// First good mood.
    SlightlyHappy = 1,
    /// Second good mood.
    Happy = 2,
    /// Third good mood.
    VeryHappy = 3,
    /// The best possible mood.
    Euphoric = 4,
}

impl Category {
    /// Every category, worst to best.
    pub const ALL: [Self; 9] = [
        Self::Suicidal,
        Self::VeryUnhappy,
        Self::Unhappy,
        Self::SlightlyUnhappy,
        Self::Neutral,
        Self::SlightlyHappy,
        Self::Happy,
        Self::VeryHappy,
        Self::Euphoric,
    ];

    /// Lowest category.
    pub const MIN: Self = Self::Suicidal;

    /// Highest category.
    pub const MAX: Self = Self::Euphoric;

    /// The wire code of this category.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a category by its wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Map an arbitrary signed step count onto a category, saturating at
    /// [`Category::MIN`] and [`Category::MAX`].
    pub fn from_clamped(steps: i64) -> Self {
        let clamped = steps.clamp(i64::from(Self::MIN.code()), i64::from(Self::MAX.code()));
        i32::try_from(clamped)
            .ok()
            .and_then(Self::from_code)
            .unwrap_or(Self::Neutral)
    }

    /// Zero-based position from worst (0) to best.
    pub fn rank(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    /// Whether this is a bad (negative) mood.
    pub const fn is_bad(self) -> bool {
        self.code() < 0
    }

    /// Whether this is a good (positive) mood.
    pub const fn is_good(self) -> bool {
        self.code() > 0
    }
}

// ---------------------------------------------------------------------------
// Taste quality
// ---------------------------------------------------------------------------

/// How a bite of food tasted. Food items report this and the server turns
/// it into a mood event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum TasteQuality {
    /// Bad enough to make someone sick.
    VomitInducing,
    /// Very bad.
    VeryBad,
    /// Bad.
    Bad,
    /// Good.
    Good,
    /// Very good.
    VeryGood,
    /// The best taste there is.
    Euphoric,
}

impl TasteQuality {
    /// Every taste quality, worst to best.
    pub const ALL: [Self; 6] = [
        Self::VomitInducing,
        Self::VeryBad,
        Self::Bad,
        Self::Good,
        Self::VeryGood,
        Self::Euphoric,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_codes_are_stable() {
        assert_eq!(EventTypeId::HadBiteGoodFood.code(), 0);
        assert_eq!(EventTypeId::HadBiteHorribleFood.code(), 5);
        for id in EventTypeId::ALL {
            assert_eq!(EventTypeId::from_code(id.code()), Some(id));
        }
        assert_eq!(EventTypeId::from_code(6), None);
        assert_eq!(EventTypeId::from_code(-1), None);
    }

    #[test]
    fn category_order_follows_codes() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::MIN.code(), -4);
        assert_eq!(Category::MAX.code(), 4);
        assert!(Category::Suicidal < Category::Neutral);
    }

    #[test]
    fn category_rank_is_position() {
        assert_eq!(Category::Suicidal.rank(), 0);
        assert_eq!(Category::Neutral.rank(), 4);
        assert_eq!(Category::Euphoric.rank(), 8);
    }

    #[test]
    fn from_clamped_saturates() {
        assert_eq!(Category::from_clamped(0), Category::Neutral);
        assert_eq!(Category::from_clamped(2), Category::Happy);
        assert_eq!(Category::from_clamped(-3), Category::VeryUnhappy);
        assert_eq!(Category::from_clamped(99), Category::Euphoric);
        assert_eq!(Category::from_clamped(i64::MIN), Category::Suicidal);
    }

    #[test]
    fn category_sign_helpers() {
        assert!(Category::Unhappy.is_bad());
        assert!(!Category::Neutral.is_bad());
        assert!(!Category::Neutral.is_good());
        assert!(Category::Euphoric.is_good());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&EventTypeId::HadBiteBadFood).ok();
        assert_eq!(json.as_deref(), Some("\"had_bite_bad_food\""));
        assert_eq!(EventTypeId::HadBiteBadFood.to_string(), "had_bite_bad_food");
    }
}
