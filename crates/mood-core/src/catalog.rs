//! Immutable registry of mood event prototypes.
//!
//! The catalog maps every [`EventTypeId`] to the prototype that instances
//! are copied from. It is built once at startup, shared by all trackers
//! behind an `Arc`, and never mutated afterwards.
//!
//! When choosing a prototype's shift, keep the tracker neurocity in mind:
//! with the default neurocity of 100, a shift of 100 moves one category.

use std::collections::BTreeMap;

use mood_types::{Category, EventTypeId};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::CatalogError;
use crate::instance::EventInstance;

/// Template that event instances are copied from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPrototype {
    /// Display name shown in the mood examine output.
    pub name: String,
    /// Signed mood shift applied while the event is active.
    pub shift: i32,
    /// How long an instance stays active, in seconds.
    pub duration: f64,
}

impl EventPrototype {
    /// Create a prototype.
    pub fn new(name: impl Into<String>, shift: i32, duration: f64) -> Self {
        Self {
            name: name.into(),
            shift,
            duration,
        }
    }
}

/// Registry of prototypes keyed by event type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    prototypes: BTreeMap<EventTypeId, EventPrototype>,
}

impl EventCatalog {
    /// The built-in food catalog.
    pub fn builtin() -> Self {
        let prototypes = [
            (
                EventTypeId::HadBiteGoodFood,
                EventPrototype::new("I've had some tasty food!", 50, 60.0),
            ),
            (
                EventTypeId::HadBiteVeryGoodFood,
                EventPrototype::new("I've had some exquisite food!", 100, 120.0),
            ),
            (
                EventTypeId::HadBiteWonderfulFood,
                EventPrototype::new("I've NEVER tasted anything more WONDERFUL!", 250, 240.0),
            ),
            (
                EventTypeId::HadBiteBadFood,
                EventPrototype::new("I've eaten some off-tasting food.", -50, 240.0),
            ),
            (
                EventTypeId::HadBiteVeryBadFood,
                EventPrototype::new("I've eaten some disgusting food.", -100, 120.0),
            ),
            (
                EventTypeId::HadBiteHorribleFood,
                EventPrototype::new(
                    "I've eaten some HORRIBLE food. The memory of it BURNT onto my tongue \
                     continues to plague my mind and stomach!",
                    -250,
                    240.0,
                ),
            ),
        ];

        Self {
            prototypes: prototypes.into_iter().collect(),
        }
    }

    /// Build a catalog from explicit prototypes. Later entries for the same
    /// type replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidDuration`] for a negative or NaN
    /// duration.
    pub fn from_prototypes<I>(prototypes: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (EventTypeId, EventPrototype)>,
    {
        let mut map = BTreeMap::new();
        for (type_id, prototype) in prototypes {
            if prototype.duration.is_nan() || prototype.duration < 0.0 {
                return Err(CatalogError::InvalidDuration {
                    type_id,
                    duration: prototype.duration,
                });
            }
            map.insert(type_id, prototype);
        }
        Ok(Self { prototypes: map })
    }

    /// The prototype registered for `type_id`, if any.
    pub fn lookup(&self, type_id: EventTypeId) -> Option<&EventPrototype> {
        self.prototypes.get(&type_id)
    }

    /// Display name of `type_id`, if it has a prototype.
    pub fn name_of(&self, type_id: EventTypeId) -> Option<&str> {
        self.lookup(type_id).map(|p| p.name.as_str())
    }

    /// Copy the prototype of `type_id` into a new instance. Returns `None`
    /// when no prototype is registered; callers treat that as a no-op.
    pub fn instantiate(&self, type_id: EventTypeId) -> Option<EventInstance> {
        self.lookup(type_id)
            .map(|prototype| EventInstance::from_prototype(type_id, prototype))
    }

    /// Identifiers that have no prototype.
    pub fn missing(&self) -> Vec<EventTypeId> {
        EventTypeId::ALL
            .into_iter()
            .filter(|id| !self.prototypes.contains_key(id))
            .collect()
    }

    /// Startup consistency pass. Warns once per identifier lacking a
    /// prototype and returns them. Never fatal.
    pub fn validate(&self) -> Vec<EventTypeId> {
        let missing = self.missing();
        for type_id in &missing {
            warn!(
                %type_id,
                "Mood catalog has no prototype for this event type; no instance will be created for it"
            );
        }
        missing
    }

    /// Number of registered prototypes.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Whether no prototypes are registered.
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Iterate prototypes in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (EventTypeId, &EventPrototype)> {
        self.prototypes.iter().map(|(id, p)| (*id, p))
    }
}

/// Check that the category set spans at least one bad, the neutral, and
/// one good mood. Logs an error and returns `false` otherwise.
pub fn validate_categories() -> bool {
    let count = Category::ALL.len();
    if count < 3 {
        error!(count, "Mood categories must have at least 3 members");
        return false;
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_type() {
        let catalog = EventCatalog::builtin();
        assert_eq!(catalog.len(), EventTypeId::ALL.len());
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn builtin_values() {
        let catalog = EventCatalog::builtin();
        let good = catalog.lookup(EventTypeId::HadBiteGoodFood).unwrap();
        assert_eq!(good.shift, 50);
        assert!((good.duration - 60.0).abs() < f64::EPSILON);

        let horrible = catalog.lookup(EventTypeId::HadBiteHorribleFood).unwrap();
        assert_eq!(horrible.shift, -250);
        assert!(horrible.name.starts_with("I've eaten some HORRIBLE food."));
    }

    #[test]
    fn missing_prototype_yields_no_instance() {
        let catalog = EventCatalog::from_prototypes([(
            EventTypeId::HadBiteGoodFood,
            EventPrototype::new("Ate food", 10, 5.0),
        )])
        .unwrap();

        assert!(catalog.instantiate(EventTypeId::HadBiteGoodFood).is_some());
        assert!(catalog.instantiate(EventTypeId::HadBiteBadFood).is_none());

        let missing = catalog.validate();
        assert_eq!(missing.len(), EventTypeId::ALL.len() - 1);
        assert!(!missing.contains(&EventTypeId::HadBiteGoodFood));
    }

    #[test]
    fn negative_duration_rejected() {
        let result = EventCatalog::from_prototypes([(
            EventTypeId::HadBiteBadFood,
            EventPrototype::new("Bad", -1, -3.0),
        )]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidDuration {
                type_id: EventTypeId::HadBiteBadFood,
                ..
            })
        ));
    }

    #[test]
    fn prototype_yaml_matches_config_shape() {
        let prototype = EventPrototype::new("Ate food", 10, 5.0);
        let yaml = serde_yml::to_string(&prototype).unwrap();
        assert!(yaml.contains("name: Ate food"), "{yaml}");
        assert!(yaml.contains("shift: 10"), "{yaml}");

        let back: EventPrototype = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(back, prototype);
    }

    #[test]
    fn instantiate_copies_name() {
        let catalog = EventCatalog::builtin();
        let instance = catalog.instantiate(EventTypeId::HadBiteBadFood).unwrap();
        assert_eq!(instance.name(), "I've eaten some off-tasting food.");
        assert_eq!(instance.shift(), -50);
    }

    #[test]
    fn category_set_is_valid() {
        assert!(validate_categories());
    }
}
