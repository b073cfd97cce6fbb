//! Human-readable lines for a sequence of active event types.

use std::collections::BTreeSet;

use mood_types::EventTypeId;
use tracing::warn;

use crate::catalog::EventCatalog;

/// Collapse a type id sequence into one line per distinct type.
///
/// Lines come out in first-seen order. Each line is the type's display
/// name, suffixed with `" (Nx)"` when the type occurs N > 1 times anywhere
/// in the sequence. Grouping is by type id, not by name. A type without a
/// prototype falls back to its identifier string.
pub fn display_lines(catalog: &EventCatalog, type_ids: &[EventTypeId]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut lines = Vec::new();

    for &type_id in type_ids {
        if !seen.insert(type_id) {
            continue;
        }

        let count = type_ids.iter().filter(|id| **id == type_id).count();
        let name = catalog.name_of(type_id).map_or_else(
            || {
                warn!(%type_id, "No prototype to name mood event line");
                type_id.as_str().to_owned()
            },
            str::to_owned,
        );

        if count > 1 {
            lines.push(format!("{name} ({count}x)"));
        } else {
            lines.push(name);
        }
    }

    lines
}
