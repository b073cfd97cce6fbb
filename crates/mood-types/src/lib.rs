//! Shared type definitions for the mood system.
//!
//! This crate is the single source of truth for the identifiers and
//! enumerations that both the server and the client agree on. Types
//! defined here flow downstream to `TypeScript` via `ts-rs` for browser
//! clients of the sync protocol.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entities, observers, and
//!   event instances
//! - [`enums`] -- Event type identifiers, mood categories, taste quality

pub mod enums;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use enums::{Category, EventTypeId, TasteQuality};
pub use ids::{EntityId, InstanceId, ObserverId};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the shared types.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::ids::EntityId::export_all();
        let _ = crate::ids::ObserverId::export_all();
        let _ = crate::ids::InstanceId::export_all();

        let _ = crate::enums::EventTypeId::export_all();
        let _ = crate::enums::Category::export_all();
        let _ = crate::enums::TasteQuality::export_all();
    }
}
