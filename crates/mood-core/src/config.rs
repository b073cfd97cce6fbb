//! Configuration loading and typed config structures for the mood system.
//!
//! The canonical configuration lives in `mood-config.yaml` at the project
//! root. Every section is optional; missing keys fall back to the defaults
//! below, so an empty file is a valid configuration.

use std::collections::BTreeMap;
use std::path::Path;

use mood_types::EventTypeId;
use serde::Deserialize;
use tracing::info;

use crate::catalog::{EventCatalog, EventPrototype};
use crate::error::CatalogError;
use crate::tracker::DEFAULT_NEUROCITY;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },

    /// A catalog override is unusable.
    #[error("invalid catalog override: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level mood system configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoodConfig {
    /// Tracker timing and sensitivity.
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Event catalog adjustments.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Demo host parameters.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MoodConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        info!(path = %path.display(), "Loaded mood configuration");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let period = self.tracker.tick_interval_secs;
        if !period.is_finite() || period <= 0.0 {
            return Err(ConfigError::Invalid {
                reason: format!("tracker.tick_interval_secs must be positive, got {period}"),
            });
        }
        if self.engine.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "engine.tick_interval_ms must be at least 1".to_owned(),
            });
        }
        let chance = self.engine.bite_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::Invalid {
                reason: format!("engine.bite_chance must be within [0, 1], got {chance}"),
            });
        }
        Ok(())
    }
}

/// Tracker timing and sensitivity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackerConfig {
    /// Seconds between tracker ticks.
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: f64,

    /// Shift needed per category step. Values below 1 are treated as 1.
    #[serde(default = "default_neurocity")]
    pub default_neurocity: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            default_neurocity: default_neurocity(),
        }
    }
}

/// Adjustments applied on top of the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogConfig {
    /// Prototypes replacing the built-in ones, keyed by event type.
    #[serde(default)]
    pub overrides: BTreeMap<EventTypeId, EventPrototype>,

    /// Event types to remove from the catalog entirely.
    #[serde(default)]
    pub disabled: Vec<EventTypeId>,
}

impl CatalogConfig {
    /// Build the effective catalog: built-ins, then overrides, then
    /// removals.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] if an override has an invalid
    /// duration.
    pub fn build(&self) -> Result<EventCatalog, ConfigError> {
        let prototypes = EventCatalog::builtin()
            .iter()
            .map(|(id, prototype)| (id, prototype.clone()))
            .chain(
                self.overrides
                    .iter()
                    .map(|(id, prototype)| (*id, prototype.clone())),
            )
            .filter(|(id, _)| !self.disabled.contains(id))
            .collect::<Vec<_>>();
        EventCatalog::from_prototypes(prototypes).map_err(ConfigError::from)
    }
}

/// Parameters of the demo host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Real-time milliseconds between host ticks.
    #[serde(default = "default_engine_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Host ticks to run before shutting down.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Number of tracked entities.
    #[serde(default = "default_entities")]
    pub entities: u32,

    /// Random seed for reproducible runs.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Per-entity chance of taking a bite each host tick.
    #[serde(default = "default_bite_chance")]
    pub bite_chance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_engine_tick_interval_ms(),
            max_ticks: default_max_ticks(),
            entities: default_entities(),
            seed: default_seed(),
            bite_chance: default_bite_chance(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_tick_interval_secs() -> f64 {
    1.0
}

const fn default_neurocity() -> i32 {
    DEFAULT_NEUROCITY
}

const fn default_engine_tick_interval_ms() -> u64 {
    1000
}

const fn default_max_ticks() -> u64 {
    300
}

const fn default_entities() -> u32 {
    3
}

const fn default_seed() -> u64 {
    42
}

const fn default_bite_chance() -> f64 {
    0.1
}

fn default_log_level() -> String {
    "info".to_owned()
}
