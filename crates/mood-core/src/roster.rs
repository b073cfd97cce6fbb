//! The set of live mood trackers owned by one server task.
//!
//! The roster activates a tracker per entity, registers it with the
//! periodic scheduler, routes sync requests from observers to the tracker
//! they own, and drives tracker ticks from [`MoodRoster::advance`]. It is a
//! plain `&mut self` value meant to live inside a single task.

use std::collections::BTreeMap;
use std::sync::Arc;

use mood_protocol::ObserverChannel;
use mood_types::{EntityId, EventTypeId, InstanceId, ObserverId, TasteQuality};
use tracing::{debug, info, warn};

use crate::catalog::EventCatalog;
use crate::config::TrackerConfig;
use crate::error::RosterError;
use crate::scheduler::PeriodicScheduler;
use crate::tracker::{MoodTracker, TickOutcome};

#[derive(Debug)]
struct Entry<C> {
    observer: ObserverId,
    tracker: MoodTracker<C>,
}

/// Per-entity trackers plus the scheduler that ticks them.
#[derive(Debug)]
pub struct MoodRoster<C, S> {
    catalog: Arc<EventCatalog>,
    scheduler: S,
    settings: TrackerConfig,
    entries: BTreeMap<EntityId, Entry<C>>,
}

impl<C: ObserverChannel, S: PeriodicScheduler> MoodRoster<C, S> {
    /// Create an empty roster.
    pub fn new(catalog: Arc<EventCatalog>, scheduler: S, settings: TrackerConfig) -> Self {
        Self {
            catalog,
            scheduler,
            settings,
            entries: BTreeMap::new(),
        }
    }

    /// Create a tracker for `entity`, owned by `observer`, and start its
    /// periodic tick.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::AlreadyActive`] if the entity already has a
    /// tracker, or [`RosterError::Scheduler`] if registration fails.
    pub fn activate(
        &mut self,
        entity: EntityId,
        observer: ObserverId,
        channel: C,
    ) -> Result<(), RosterError> {
        if self.entries.contains_key(&entity) {
            return Err(RosterError::AlreadyActive(entity));
        }
        self.scheduler
            .register(entity, self.settings.tick_interval_secs)?;

        let tracker = MoodTracker::with_neurocity(
            Arc::clone(&self.catalog),
            channel,
            self.settings.default_neurocity,
        );
        self.entries.insert(entity, Entry { observer, tracker });
        info!(%entity, %observer, "Mood tracker activated");
        Ok(())
    }

    /// Stop ticking `entity` and hand back its tracker.
    pub fn deactivate(&mut self, entity: EntityId) -> Option<MoodTracker<C>> {
        let entry = self.entries.remove(&entity)?;
        if !self.scheduler.deregister(entity) {
            warn!(%entity, "Mood tracker had no periodic tick registered");
        }
        info!(%entity, "Mood tracker deactivated");
        Some(entry.tracker)
    }

    /// The tracker for `entity`.
    pub fn tracker(&self, entity: EntityId) -> Option<&MoodTracker<C>> {
        self.entries.get(&entity).map(|entry| &entry.tracker)
    }

    /// Mutable tracker for `entity`.
    pub fn tracker_mut(&mut self, entity: EntityId) -> Option<&mut MoodTracker<C>> {
        self.entries.get_mut(&entity).map(|entry| &mut entry.tracker)
    }

    /// Active entities in key order.
    pub fn entities(&self) -> Vec<EntityId> {
        self.entries.keys().copied().collect()
    }

    /// Number of active trackers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tracker is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start an event on `entity`'s tracker.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownEntity`] if the entity has no tracker.
    pub fn add_event(
        &mut self,
        entity: EntityId,
        type_id: EventTypeId,
    ) -> Result<Option<InstanceId>, RosterError> {
        let tracker = self
            .tracker_mut(entity)
            .ok_or(RosterError::UnknownEntity(entity))?;
        Ok(tracker.add_event(type_id))
    }

    /// Record a bite of food on `entity`'s tracker.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownEntity`] if the entity has no tracker.
    pub fn record_bite(
        &mut self,
        entity: EntityId,
        quality: TasteQuality,
    ) -> Result<Option<InstanceId>, RosterError> {
        let tracker = self
            .tracker_mut(entity)
            .ok_or(RosterError::UnknownEntity(entity))?;
        Ok(tracker.record_bite(quality))
    }

    /// Answer an observer's initial sync request with an immediate resync
    /// of the tracker it owns.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownObserver`] if the observer owns no
    /// tracker.
    pub fn handle_sync_request(&mut self, observer: ObserverId) -> Result<EntityId, RosterError> {
        let (entity, entry) = self
            .entries
            .iter_mut()
            .find(|(_, entry)| entry.observer == observer)
            .ok_or(RosterError::UnknownObserver(observer))?;

        debug!(%entity, %observer, "Answering mood sync request");
        entry.tracker.send_resync();
        Ok(*entity)
    }

    /// Let `elapsed` seconds pass and tick every tracker that came due.
    pub fn advance(&mut self, elapsed: f64) -> Vec<(EntityId, TickOutcome)> {
        let mut outcomes = Vec::new();
        for due in self.scheduler.advance(elapsed) {
            let Some(entry) = self.entries.get_mut(&due.entity) else {
                warn!(entity = %due.entity, "Periodic tick for an inactive mood tracker");
                continue;
            };
            let outcome = entry.tracker.tick(due.interval);
            if !outcome.is_empty() {
                debug!(entity = %due.entity, expired = outcome.expired.len(), "Mood events expired");
            }
            outcomes.push((due.entity, outcome));
        }
        outcomes
    }

    /// The scheduler driving this roster.
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
