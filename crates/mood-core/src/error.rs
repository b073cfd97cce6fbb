//! Error types for the mood-core crate.
//!
//! Most mood-system failures are deliberately non-fatal (a missing
//! prototype degrades to "no event"), so the enums here cover the few
//! contract violations callers may want to inspect.

use mood_types::{EntityId, EventTypeId, InstanceId, ObserverId};

/// Errors raised while building an event catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// A prototype duration was negative or not a number.
    #[error("prototype {type_id} has invalid duration {duration}")]
    InvalidDuration {
        /// The offending event type.
        type_id: EventTypeId,
        /// The rejected duration in seconds.
        duration: f64,
    },
}

/// Errors raised by tracker operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// The instance is not in the tracker's active set.
    #[error("mood event instance {0} is not tracked")]
    NotTracked(InstanceId),
}

/// Errors raised by the periodic scheduler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    /// The requested period is not a positive finite number.
    #[error("invalid tick period: {period}")]
    InvalidPeriod {
        /// The rejected period in seconds.
        period: f64,
    },

    /// The key is already registered.
    #[error("entity {0} already has a periodic tick")]
    AlreadyRegistered(EntityId),
}

/// Errors raised by the tracker roster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// No tracker is active for the entity.
    #[error("no active mood tracker for entity {0}")]
    UnknownEntity(EntityId),

    /// No tracker is observed by the given observer.
    #[error("observer {0} does not own a mood tracker")]
    UnknownObserver(ObserverId),

    /// A tracker is already active for the entity.
    #[error("entity {0} already has an active mood tracker")]
    AlreadyActive(EntityId),

    /// Scheduler registration failed.
    #[error("scheduler error: {source}")]
    Scheduler {
        /// The underlying scheduler error.
        #[from]
        source: SchedulerError,
    },
}
