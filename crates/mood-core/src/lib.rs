//! Server-side mood tracking.
//!
//! Each tracked entity owns a [`MoodTracker`] holding its active, decaying
//! mood events. The tracker derives a discrete [`Category`] from the sum of
//! active shifts and pushes every change at its observer as a delta
//! notifier followed by a full resync.
//!
//! # Modules
//!
//! - [`catalog`] -- Immutable registry of event prototypes.
//! - [`classifier`] -- Shift sum to category quantization.
//! - [`config`] -- Configuration loading from `mood-config.yaml`.
//! - [`display`] -- Grouped, human-readable event lines.
//! - [`instance`] -- Live event instances with a countdown.
//! - [`roster`] -- Per-entity trackers driven by a scheduler.
//! - [`scheduler`] -- [`PeriodicScheduler`] trait and [`IntervalScheduler`].
//! - [`taste`] -- Food taste to event mapping.
//! - [`tracker`] -- The per-entity mood state machine.
//!
//! [`Category`]: mood_types::Category

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod instance;
pub mod roster;
pub mod scheduler;
pub mod taste;
pub mod tracker;

pub use catalog::{EventCatalog, EventPrototype, validate_categories};
pub use classifier::classify;
pub use config::{ConfigError, MoodConfig, TrackerConfig};
pub use display::display_lines;
pub use error::{CatalogError, RosterError, SchedulerError, TrackerError};
pub use instance::EventInstance;
pub use roster::MoodRoster;
pub use scheduler::{DueTick, IntervalScheduler, PeriodicScheduler};
pub use taste::taste_event;
pub use tracker::{MoodTracker, TickOutcome};
