//! Periodic tick scheduling for mood trackers.
//!
//! Trackers do not own timers. The host drives a [`PeriodicScheduler`] with
//! wall-clock (or simulated) elapsed time and gets back the ticks that came
//! due. Each registration keeps its own accumulator, so trackers activated
//! at different moments tick at different phases.

use tracing::{trace, warn};

use mood_types::EntityId;

use crate::error::SchedulerError;

/// Upper bound on ticks one registration can produce per `advance` call.
/// Backlog beyond this is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 64;

/// A tick that came due for one registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueTick {
    /// Registration key.
    pub entity: EntityId,
    /// Seconds this tick covers (the registered period).
    pub interval: f64,
}

/// Capability to invoke a callback at a fixed interval per key.
pub trait PeriodicScheduler {
    /// Start ticking `entity` every `period` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidPeriod`] for a non-positive or
    /// non-finite period, and [`SchedulerError::AlreadyRegistered`] for a
    /// duplicate key.
    fn register(&mut self, entity: EntityId, period: f64) -> Result<(), SchedulerError>;

    /// Stop ticking `entity`. Returns whether it was registered.
    fn deregister(&mut self, entity: EntityId) -> bool;

    /// Let `elapsed` seconds pass and return the ticks that came due.
    fn advance(&mut self, elapsed: f64) -> Vec<DueTick>;
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    entity: EntityId,
    period: f64,
    accumulated: f64,
}

/// In-process [`PeriodicScheduler`]. Due ticks come out in registration
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalScheduler {
    slots: Vec<Slot>,
}

impl IntervalScheduler {
    /// Create a scheduler with no registrations.
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of registrations.
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is registered.
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `entity` is registered.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.slots.iter().any(|slot| slot.entity == entity)
    }
}

impl PeriodicScheduler for IntervalScheduler {
    fn register(&mut self, entity: EntityId, period: f64) -> Result<(), SchedulerError> {
        if !period.is_finite() || period <= 0.0 {
            return Err(SchedulerError::InvalidPeriod { period });
        }
        if self.contains(entity) {
            return Err(SchedulerError::AlreadyRegistered(entity));
        }
        self.slots.push(Slot {
            entity,
            period,
            accumulated: 0.0,
        });
        trace!(%entity, period, "Registered periodic tick");
        Ok(())
    }

    fn deregister(&mut self, entity: EntityId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.entity != entity);
        before != self.slots.len()
    }

    fn advance(&mut self, elapsed: f64) -> Vec<DueTick> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            warn!(elapsed, "Ignoring invalid scheduler advance");
            return Vec::new();
        }

        let mut due = Vec::new();
        for slot in &mut self.slots {
            slot.accumulated += elapsed;

            let mut fired: u32 = 0;
            while slot.accumulated >= slot.period {
                if fired >= MAX_CATCH_UP_TICKS {
                    warn!(
                        entity = %slot.entity,
                        backlog = slot.accumulated,
                        "Periodic tick fell behind, dropping backlog"
                    );
                    slot.accumulated %= slot.period;
                    break;
                }
                slot.accumulated -= slot.period;
                fired = fired.saturating_add(1);
                due.push(DueTick {
                    entity: slot.entity,
                    interval: slot.period,
                });
            }
        }
        due
    }
}
