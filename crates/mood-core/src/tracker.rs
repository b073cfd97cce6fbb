//! Server-authoritative mood state for one entity.
//!
//! A [`MoodTracker`] owns the entity's active event instances, ages them on
//! every periodic tick, and pushes every change at its observer through an
//! injected [`ObserverChannel`]. Each change produces exactly one message
//! pair, always in the same order:
//!
//! 1. a [`DeltaNotifier`] carrying the signed shift that was applied or
//!    withdrawn, then
//! 2. a [`FullResync`] carrying the category and the full active type list
//!    *after* the change.
//!
//! Expired instances are removed one at a time, so a tick that expires
//! several events emits several pairs with progressively smaller resyncs.

use std::sync::Arc;

use mood_protocol::{DeltaNotifier, FullResync, ObserverChannel};
use mood_types::{Category, EventTypeId, InstanceId, TasteQuality};
use tracing::{debug, error, warn};

use crate::catalog::EventCatalog;
use crate::classifier::classify;
use crate::display;
use crate::error::TrackerError;
use crate::instance::EventInstance;
use crate::taste::taste_event;

/// Neurocity used when none is configured.
pub const DEFAULT_NEUROCITY: i32 = 100;

/// Result of one tracker tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Instances removed this tick, in removal order.
    pub expired: Vec<EventInstance>,
}

impl TickOutcome {
    /// Whether nothing expired.
    pub const fn is_empty(&self) -> bool {
        self.expired.is_empty()
    }
}

/// Per-entity mood state machine.
#[derive(Debug)]
pub struct MoodTracker<C> {
    catalog: Arc<EventCatalog>,
    active_events: Vec<EventInstance>,
    neurocity: i32,
    channel: C,
}

impl<C: ObserverChannel> MoodTracker<C> {
    /// Create an empty tracker with the default neurocity.
    pub const fn new(catalog: Arc<EventCatalog>, channel: C) -> Self {
        Self {
            catalog,
            active_events: Vec::new(),
            neurocity: DEFAULT_NEUROCITY,
            channel,
        }
    }

    /// Create an empty tracker with an explicit neurocity.
    pub fn with_neurocity(catalog: Arc<EventCatalog>, channel: C, neurocity: i32) -> Self {
        let mut tracker = Self::new(catalog, channel);
        tracker.set_neurocity(neurocity);
        tracker
    }

    /// Set the shift needed per category step. Values below 1 are stored
    /// as 1.
    pub fn set_neurocity(&mut self, neurocity: i32) {
        self.neurocity = neurocity.max(1);
    }

    /// Current neurocity, always at least 1.
    pub const fn neurocity(&self) -> i32 {
        self.neurocity
    }

    /// Start a new event of `type_id`.
    ///
    /// Returns `None` without sending anything when the catalog has no
    /// prototype for the type.
    pub fn add_event(&mut self, type_id: EventTypeId) -> Option<InstanceId> {
        let Some(instance) = self.catalog.instantiate(type_id) else {
            debug!(%type_id, "No prototype registered, ignoring mood event");
            return None;
        };

        let id = instance.id();
        let shift = instance.shift();
        self.active_events.push(instance);
        debug!(%type_id, shift, instance = %id, "Mood event added");

        self.channel.send_notifier(&DeltaNotifier { shift });
        self.send_resync();
        Some(id)
    }

    /// Start the event matching how a bite of food tasted.
    pub fn record_bite(&mut self, quality: TasteQuality) -> Option<InstanceId> {
        self.add_event(taste_event(quality))
    }

    /// Age every active event by `delta_time` seconds and remove the ones
    /// that ran out.
    ///
    /// Expiry is decided over the set as it stood before any removal;
    /// each expired instance is then removed by identity and reported with
    /// its own notifier and resync. A negative or NaN `delta_time` is
    /// treated as zero.
    pub fn tick(&mut self, delta_time: f64) -> TickOutcome {
        let delta = if delta_time.is_nan() || delta_time < 0.0 {
            warn!(delta_time, "Invalid mood tick delta, treating as zero");
            0.0
        } else {
            delta_time
        };

        for instance in &mut self.active_events {
            instance.subtract_time(delta);
        }

        let finished: Vec<InstanceId> = self
            .active_events
            .iter()
            .filter(|instance| instance.is_finished())
            .map(EventInstance::id)
            .collect();

        let mut outcome = TickOutcome::default();
        for id in finished {
            match self.remove_event(id) {
                Ok(instance) => outcome.expired.push(instance),
                Err(e) => warn!(error = %e, "Expired mood event vanished before removal"),
            }
        }
        outcome
    }

    /// Remove one instance by identity.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotTracked`] when the instance is not active.
    /// Nothing is sent and no state changes in that case.
    pub fn remove_event(&mut self, instance_id: InstanceId) -> Result<EventInstance, TrackerError> {
        let Some(index) = self
            .active_events
            .iter()
            .position(|instance| instance.id() == instance_id)
        else {
            error!(instance = %instance_id, "Tried to remove a mood event that is not tracked");
            return Err(TrackerError::NotTracked(instance_id));
        };

        let instance = self.active_events.remove(index);
        debug!(
            type_id = %instance.type_id(),
            shift = instance.shift(),
            instance = %instance_id,
            "Mood event removed"
        );

        self.channel.send_notifier(&DeltaNotifier {
            shift: instance.shift().saturating_neg(),
        });
        self.send_resync();
        Ok(instance)
    }

    /// Sum of active shifts. Zero when empty; saturates instead of
    /// overflowing.
    pub fn overall_shift_sum(&self) -> i64 {
        self.active_events
            .iter()
            .fold(0_i64, |sum, instance| sum.saturating_add(i64::from(instance.shift())))
    }

    /// Current mood category.
    pub fn overall_category(&self) -> Category {
        classify(self.overall_shift_sum(), self.neurocity)
    }

    /// Active event types in insertion order, duplicates kept.
    pub fn active_type_ids(&self) -> Vec<EventTypeId> {
        self.active_events.iter().map(EventInstance::type_id).collect()
    }

    /// Active instances in insertion order.
    pub fn active_events(&self) -> &[EventInstance] {
        &self.active_events
    }

    /// Whether any active instance is of `type_id`.
    pub fn is_affected_by(&self, type_id: EventTypeId) -> bool {
        self.active_events
            .iter()
            .any(|instance| instance.type_id() == type_id)
    }

    /// Display lines for the current active set.
    pub fn display_lines(&self) -> Vec<String> {
        display::display_lines(&self.catalog, &self.active_type_ids())
    }

    /// Snapshot of the current state as a resync message.
    pub fn resync(&self) -> FullResync {
        FullResync {
            category: self.overall_category(),
            active_type_ids: self.active_type_ids(),
        }
    }

    /// Push a full resync to the observer without changing state.
    pub fn send_resync(&mut self) {
        let resync = self.resync();
        self.channel.send_resync(&resync);
    }

    /// The catalog instances are created from.
    pub const fn catalog(&self) -> &Arc<EventCatalog> {
        &self.catalog
    }

    /// The observer channel.
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Mutable access to the observer channel.
    pub const fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
