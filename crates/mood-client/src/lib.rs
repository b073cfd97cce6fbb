//! Client-side mirror of server mood state.
//!
//! A [`MoodMirror`] decodes frames from the server, keeps the last known
//! category, and pushes the category and grouped event lines to a
//! [`DisplaySink`]. [`MoodIndicator`] is the HUD sink: it caches what it
//! was shown so the player can examine it later.

pub mod error;
pub mod mirror;
pub mod sink;

pub use error::ClientError;
pub use mirror::{MOOD_BETTER, MOOD_WORSE, MoodMirror};
pub use sink::{DisplaySink, EXAMINE_HEADER, MoodIndicator};
