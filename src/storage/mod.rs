//! JSON file persistence for presets and history
//!
//! The refinement pipeline never persists anything; this layer is what the
//! CLI uses to remember named settings presets and recent refinements.
//! Files are pretty-printed JSON in a single data directory and are written
//! atomically (temp file + rename).

pub mod history;
pub mod json_store;
pub mod presets;

pub use history::{HistoryEntry, HistoryStore};
pub use json_store::JsonStore;
pub use presets::{Preset, PresetStore};

/// Prefixed unique identifier, e.g. `preset-2f1c...`
pub(crate) fn create_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// Current time as an RFC 3339 string
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
