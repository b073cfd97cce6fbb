//! Simulated client: mirrors one tracker and logs what the player would
//! see.

use std::sync::Arc;

use mood_client::{DisplaySink, MoodIndicator, MoodMirror};
use mood_core::EventCatalog;
use mood_types::{Category, EntityId, ObserverId};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::transport::Inbound;

/// [`DisplaySink`] that logs every update and keeps a HUD indicator.
#[derive(Debug)]
pub struct TracingSink {
    entity: EntityId,
    indicator: MoodIndicator,
}

impl TracingSink {
    /// A sink for the player controlling `entity`.
    pub const fn new(entity: EntityId) -> Self {
        Self {
            entity,
            indicator: MoodIndicator::new(),
        }
    }

    /// Hand back the indicator.
    pub fn into_indicator(self) -> MoodIndicator {
        self.indicator
    }
}

impl DisplaySink for TracingSink {
    fn show_mood(&mut self, category: Category, lines: &[String]) {
        debug!(entity = %self.entity, ?category, lines = lines.len(), "Mood indicator updated");
        self.indicator.show_mood(category, lines);
    }

    fn chat_line(&mut self, line: &str) {
        info!(entity = %self.entity, "{line}");
        self.indicator.chat_line(line);
    }
}

/// Run one client until the server closes its connection.
///
/// Sends a sync request first, then applies every frame it receives.
/// Malformed frames are logged and skipped.
pub async fn run_client(
    entity: EntityId,
    observer: ObserverId,
    catalog: Arc<EventCatalog>,
    mut frames: UnboundedReceiver<Vec<u8>>,
    server: UnboundedSender<Inbound>,
) -> Result<MoodIndicator, EngineError> {
    let mut mirror = MoodMirror::new(catalog, TracingSink::new(entity));

    let frame = MoodMirror::<TracingSink>::sync_request_frame()?;
    if server.send(Inbound { observer, frame }).is_err() {
        warn!(%entity, "Server gone before sync request");
    }

    let mut received: u64 = 0;
    while let Some(frame) = frames.recv().await {
        received = received.saturating_add(1);
        if let Err(e) = mirror.receive(&frame) {
            warn!(%entity, error = %e, "Skipping mood frame");
        }
    }

    info!(%entity, frames = received, "Client connection closed");
    let (_, sink) = mirror.into_parts();
    Ok(sink.into_indicator())
}
