//! Mood engine binary.
//!
//! Hosts a roster of mood trackers in one server task and a simulated
//! client per tracked entity, wired together with in-process channels.
//! Entities take random bites of food; clients mirror the resulting mood
//! and log what the player would see.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `mood-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Check the category set and build the event catalog
//! 4. Activate one tracker and spawn one client per entity
//! 5. Run the server loop
//! 6. Close connections and log each client's final examine text

mod client;
mod error;
mod server;
mod transport;

use std::path::Path;
use std::sync::Arc;

use mood_core::{IntervalScheduler, MoodConfig, MoodRoster, validate_categories};
use mood_protocol::ConnectionChannel;
use mood_types::{EntityId, ObserverId};
use tokio::sync::mpsc::unbounded_channel;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::transport::MpscTransport;

/// Application entry point for the mood engine.
///
/// # Errors
///
/// Returns an error if any initialization step or a client task fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        entities = config.engine.entities,
        seed = config.engine.seed,
        tick_interval_ms = config.engine.tick_interval_ms,
        tracker_tick_secs = config.tracker.tick_interval_secs,
        neurocity = config.tracker.default_neurocity,
        "mood-engine starting"
    );

    // 3. Sanity checks and catalog.
    if !validate_categories() {
        return Err(EngineError::InvalidCategories.into());
    }
    let catalog = Arc::new(config.catalog.build().map_err(EngineError::from)?);
    let missing = catalog.validate();
    info!(
        prototypes = catalog.len(),
        missing = missing.len(),
        "Event catalog ready"
    );

    // 4. Trackers and clients.
    let mut roster = MoodRoster::new(
        Arc::clone(&catalog),
        IntervalScheduler::new(),
        config.tracker.clone(),
    );
    let (inbound_tx, inbound_rx) = unbounded_channel();
    let mut clients = Vec::new();

    for _ in 0..config.engine.entities {
        let entity = EntityId::new();
        let observer = ObserverId::new();
        let (transport, frames) = MpscTransport::pair();
        roster
            .activate(entity, observer, ConnectionChannel::new(observer, transport))
            .map_err(EngineError::from)?;

        let handle = tokio::spawn(client::run_client(
            entity,
            observer,
            Arc::clone(&catalog),
            frames,
            inbound_tx.clone(),
        ));
        clients.push((entity, handle));
    }
    drop(inbound_tx);
    info!(clients = clients.len(), "Clients connected");

    // 5. Run the server until max_ticks.
    let summary = server::run_server(roster, &config.engine, inbound_rx).await;

    // 6. Collect clients.
    for (entity, handle) in clients {
        let indicator = handle.await.map_err(|e| EngineError::Client {
            message: format!("{e}"),
        })??;
        info!(
            %entity,
            category = ?indicator.category(),
            examine = %indicator.examine(),
            "Final mood"
        );
    }

    info!(
        ticks = summary.ticks,
        bites = summary.bites,
        expired = summary.expired,
        sync_requests = summary.sync_requests,
        "mood-engine shutdown complete"
    );

    Ok(())
}

/// Load the configuration from `mood-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<MoodConfig, EngineError> {
    let config_path = Path::new("mood-config.yaml");
    if config_path.exists() {
        let config = MoodConfig::from_file(config_path)?;
        Ok(config)
    } else {
        Ok(MoodConfig::default())
    }
}
