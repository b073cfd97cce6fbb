//! Server loop: owns every tracker and drives them from one task.
//!
//! Each host tick, every entity may take a random bite of food, then the
//! roster's scheduler is advanced by the tick length. Sync requests from
//! clients are answered as soon as they arrive, ahead of a due tick.

use std::time::Duration;

use mood_core::config::EngineConfig;
use mood_core::{IntervalScheduler, MoodRoster};
use mood_protocol::{ConnectionChannel, MoodMessage};
use mood_types::{EntityId, TasteQuality};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::transport::{Inbound, MpscTransport};

/// The roster type the engine hosts.
pub type EngineRoster = MoodRoster<ConnectionChannel<MpscTransport>, IntervalScheduler>;

/// Totals reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Host ticks executed.
    pub ticks: u64,
    /// Bites recorded across all entities.
    pub bites: u64,
    /// Mood events that expired.
    pub expired: u64,
    /// Sync requests answered.
    pub sync_requests: u64,
}

/// Run the server loop for `config.max_ticks` host ticks, consuming the
/// roster. Dropping the roster at the end closes every client connection.
pub async fn run_server(
    mut roster: EngineRoster,
    config: &EngineConfig,
    mut inbound: UnboundedReceiver<Inbound>,
) -> RunSummary {
    let tick_length = Duration::from_millis(config.tick_interval_ms.max(1));
    let mut interval = tokio::time::interval(tick_length);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut summary = RunSummary::default();
    let bite_chance = if (0.0..=1.0).contains(&config.bite_chance) {
        config.bite_chance
    } else {
        warn!(bite_chance = config.bite_chance, "Bite chance out of range, disabling bites");
        0.0
    };

    info!(
        entities = roster.len(),
        max_ticks = config.max_ticks,
        tick_interval_ms = config.tick_interval_ms,
        "Mood server loop starting"
    );

    while summary.ticks < config.max_ticks {
        tokio::select! {
            biased;
            Some(message) = inbound.recv() => {
                handle_inbound(&mut roster, &message, &mut summary);
            }
            _ = interval.tick() => {
                summary.ticks = summary.ticks.saturating_add(1);
                run_tick(&mut roster, bite_chance, tick_length, &mut rng, &mut summary);
            }
        }
    }

    info!(
        ticks = summary.ticks,
        bites = summary.bites,
        expired = summary.expired,
        "Mood server loop finished"
    );
    summary
}

fn run_tick(
    roster: &mut EngineRoster,
    bite_chance: f64,
    tick_length: Duration,
    rng: &mut impl Rng,
    summary: &mut RunSummary,
) {
    for entity in roster.entities() {
        if !rng.random_bool(bite_chance) {
            continue;
        }
        let quality = random_taste(rng);
        match roster.record_bite(entity, quality) {
            Ok(Some(_)) => {
                summary.bites = summary.bites.saturating_add(1);
                debug!(%entity, ?quality, "Entity took a bite");
            }
            Ok(None) => debug!(%entity, ?quality, "Bite had no mood effect"),
            Err(e) => warn!(%entity, error = %e, "Bite for unknown entity"),
        }
    }

    for (entity, outcome) in roster.advance(tick_length.as_secs_f64()) {
        log_expiry(entity, outcome.expired.len());
        let expired = u64::try_from(outcome.expired.len()).unwrap_or(u64::MAX);
        summary.expired = summary.expired.saturating_add(expired);
    }
}

fn handle_inbound(roster: &mut EngineRoster, message: &Inbound, summary: &mut RunSummary) {
    match MoodMessage::from_bytes(&message.frame) {
        Ok(MoodMessage::SyncRequest) => match roster.handle_sync_request(message.observer) {
            Ok(entity) => {
                summary.sync_requests = summary.sync_requests.saturating_add(1);
                debug!(%entity, observer = %message.observer, "Initial mood sync sent");
            }
            Err(e) => warn!(observer = %message.observer, error = %e, "Sync request rejected"),
        },
        Ok(other) => {
            warn!(observer = %message.observer, kind = ?other.kind(), "Unexpected client message");
        }
        Err(e) => warn!(observer = %message.observer, error = %e, "Malformed client frame"),
    }
}

fn random_taste(rng: &mut impl Rng) -> TasteQuality {
    let index = rng.random_range(0..TasteQuality::ALL.len());
    TasteQuality::ALL
        .get(index)
        .copied()
        .unwrap_or(TasteQuality::Good)
}

fn log_expiry(entity: EntityId, count: usize) {
    if count > 0 {
        debug!(%entity, count, "Mood events expired");
    }
}
