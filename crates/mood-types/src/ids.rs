//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Trackers, observers, and live event instances each get a strongly-typed
//! ID so they cannot be mixed up at compile time. All IDs use UUID v7
//! (time-ordered), which also makes instance IDs sort in creation order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_id! {
    /// Unique identifier for an entity that owns a mood tracker.
    EntityId
}

define_id! {
    /// Handle of the connection that observes one entity's mood.
    ObserverId
}

define_id! {
    /// Identity of one live event instance inside a tracker.
    ///
    /// Two instances of the same [`EventTypeId`](crate::EventTypeId) have
    /// distinct instance IDs, which is what removal looks up.
    InstanceId
}
