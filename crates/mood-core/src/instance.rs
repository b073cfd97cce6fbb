//! Live, decaying occurrences of a mood event.

use mood_types::{EventTypeId, InstanceId};

use crate::catalog::EventPrototype;

/// Slack allowed when comparing elapsed time against the duration, so that
/// rounding from summing fractional intervals cannot delay expiry by a tick.
const EXPIRY_TOLERANCE: f64 = 1e-9;

/// One active mood event owned by a single tracker.
///
/// Name, shift and duration are copied from the prototype and never
/// change. Only the owning tracker's tick may advance `elapsed`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInstance {
    id: InstanceId,
    type_id: EventTypeId,
    name: String,
    shift: i32,
    duration: f64,
    elapsed: f64,
}

impl EventInstance {
    /// Copy a prototype into a fresh instance with a new identity.
    pub(crate) fn from_prototype(type_id: EventTypeId, prototype: &EventPrototype) -> Self {
        Self {
            id: InstanceId::new(),
            type_id,
            name: prototype.name.clone(),
            shift: prototype.shift,
            duration: prototype.duration,
            elapsed: 0.0,
        }
    }

    /// Identity used to remove this instance.
    pub const fn id(&self) -> InstanceId {
        self.id
    }

    /// The event type this instance was created from.
    pub const fn type_id(&self) -> EventTypeId {
        self.type_id
    }

    /// Display name copied from the prototype.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed mood shift.
    pub const fn shift(&self) -> i32 {
        self.shift
    }

    /// Total lifetime in seconds.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds until expiry. Zero or below means expired.
    pub const fn time_left(&self) -> f64 {
        self.duration - self.elapsed
    }

    /// Decay the countdown.
    pub(crate) const fn subtract_time(&mut self, delta: f64) {
        self.elapsed += delta;
    }

    /// Whether the accumulated elapsed time has reached the duration.
    pub const fn is_finished(&self) -> bool {
        self.elapsed >= self.duration - EXPIRY_TOLERANCE
    }

    /// Whether the event improves mood.
    pub const fn is_positive(&self) -> bool {
        self.shift > 0
    }

    /// Whether the event leaves mood unchanged.
    pub const fn is_neutral(&self) -> bool {
        self.shift == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prototype(shift: i32, duration: f64) -> EventPrototype {
        EventPrototype::new("Test", shift, duration)
    }

    #[test]
    fn copies_prototype_fields() {
        let instance = EventInstance::from_prototype(
            EventTypeId::HadBiteGoodFood,
            &prototype(50, 60.0),
        );
        assert_eq!(instance.type_id(), EventTypeId::HadBiteGoodFood);
        assert_eq!(instance.name(), "Test");
        assert_eq!(instance.shift(), 50);
        assert!((instance.time_left() - 60.0).abs() < f64::EPSILON);
        assert!(instance.is_positive());
        assert!(!instance.is_neutral());
    }

    #[test]
    fn each_instance_gets_its_own_identity() {
        let proto = prototype(-5, 1.0);
        let a = EventInstance::from_prototype(EventTypeId::HadBiteBadFood, &proto);
        let b = EventInstance::from_prototype(EventTypeId::HadBiteBadFood, &proto);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn finishes_at_zero() {
        let mut instance =
            EventInstance::from_prototype(EventTypeId::HadBiteBadFood, &prototype(-50, 2.0));
        instance.subtract_time(1.0);
        assert!(!instance.is_finished());
        instance.subtract_time(1.0);
        assert!(instance.is_finished());
    }

    #[test]
    fn fractional_steps_finish_on_time() {
        for (duration, steps) in [(1.0, 10), (0.3, 3), (0.7, 7)] {
            let mut instance = EventInstance::from_prototype(
                EventTypeId::HadBiteGoodFood,
                &prototype(1, duration),
            );
            for _ in 1..steps {
                instance.subtract_time(0.1);
                assert!(!instance.is_finished(), "{duration} finished early");
            }
            instance.subtract_time(0.1);
            assert!(instance.is_finished(), "{duration} after {steps} steps");
        }
    }

    #[test]
    fn zero_duration_is_born_finished() {
        let instance =
            EventInstance::from_prototype(EventTypeId::HadBiteBadFood, &prototype(0, 0.0));
        assert!(instance.is_finished());
        assert!(instance.is_neutral());
    }
}
