//! Named settings presets
//!
//! Presets are stored as a JSON array in `presets.json`. Import is lenient:
//! entries that do not look like presets are skipped, and a document that is
//! not an array leaves the current list untouched.

use super::{create_id, now_timestamp, JsonStore};
use crate::error::{ErrorCode, PromptError, Result};
use crate::settings::{sanitize_settings, Settings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

pub const PRESETS_FILE: &str = "presets.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub settings: Settings,
    pub created_at: String,
    pub updated_at: String,
}

impl Preset {
    pub fn new(name: impl Into<String>, settings: Settings) -> Self {
        let now = now_timestamp();
        Self {
            id: create_id("preset"),
            name: name.into(),
            settings,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Rebuild a preset read back from `presets.json`.
    ///
    /// Only `id` and `name` are required. Settings go through
    /// [`sanitize_settings`] so a hand-edited field does not cost the entry.
    fn from_stored(value: &Value) -> Option<Self> {
        let id = non_empty_str(value, "id")?;
        let name = non_empty_str(value, "name")?;
        let now = now_timestamp();
        Some(Self {
            id: id.to_string(),
            name: name.to_string(),
            settings: sanitize_settings(value.get("settings")),
            created_at: non_empty_str(value, "createdAt")
                .map_or_else(|| now.clone(), str::to_string),
            updated_at: non_empty_str(value, "updatedAt").map_or(now, str::to_string),
        })
    }

    /// Re-create a preset from an imported JSON value.
    ///
    /// Requires non-empty `id` and `name` plus a `settings` object; the
    /// imported id is replaced with a fresh one.
    fn from_import(value: &Value) -> Option<Self> {
        value.get("settings").filter(|s| s.is_object())?;
        let mut preset = Self::from_stored(value)?;
        preset.id = create_id("preset");
        preset.updated_at = now_timestamp();
        Some(preset)
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

pub struct PresetStore {
    store: JsonStore,
}

impl PresetStore {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Stored presets for display; an unreadable file shows as empty
    pub async fn load(&self) -> Vec<Preset> {
        self.load_stored().await.unwrap_or_else(|e| {
            warn!("Ignoring stored presets: {}", e);
            Vec::new()
        })
    }

    /// Stored presets for a read-modify-write; fails instead of falling back
    async fn load_stored(&self) -> Result<Vec<Preset>> {
        let records = self.store.read_records(PRESETS_FILE).await?;
        let total = records.len();
        let presets: Vec<Preset> = records.iter().filter_map(Preset::from_stored).collect();
        if presets.len() < total {
            warn!(
                "Dropped {} unrecoverable preset(s) from {}",
                total - presets.len(),
                PRESETS_FILE
            );
        }
        Ok(presets)
    }

    /// Append a new preset and persist the list
    pub async fn save(&self, name: &str, settings: Settings) -> Result<Vec<Preset>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PromptError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_ARGUMENT,
                "preset name cannot be empty",
                Some("name".to_string()),
            ));
        }

        let mut presets = self.load_stored().await?;
        presets.push(Preset::new(name, settings));
        self.store.write_json(PRESETS_FILE, &presets).await?;
        info!("Saved preset '{}'", name);
        Ok(presets)
    }

    /// Remove the preset with `id`; unknown ids leave the list unchanged
    pub async fn delete(&self, id: &str) -> Result<Vec<Preset>> {
        let mut presets = self.load_stored().await?;
        let before = presets.len();
        presets.retain(|preset| preset.id != id);
        if presets.len() == before {
            warn!("No preset with id '{}'", id);
        }
        self.store.write_json(PRESETS_FILE, &presets).await?;
        Ok(presets)
    }

    /// Find a preset by id, falling back to an exact name match
    pub async fn find(&self, key: &str) -> Option<Preset> {
        let presets = self.load().await;
        presets
            .iter()
            .find(|p| p.id == key)
            .or_else(|| presets.iter().find(|p| p.name == key))
            .cloned()
    }

    pub async fn export(&self) -> Result<String> {
        let presets = self.load_stored().await?;
        serde_json::to_string_pretty(&presets).map_err(|e| {
            PromptError::storage_with_code(
                ErrorCode::STORAGE_SERIALIZATION_ERROR,
                "Failed to export presets",
                None,
            )
            .with_source(e)
        })
    }

    /// Merge presets from an exported JSON document into the stored list
    pub async fn import(&self, json: &str) -> Result<Vec<Preset>> {
        let current = self.load_stored().await?;
        let imported = match parse_import(json) {
            Some(imported) => imported,
            None => {
                warn!("Preset import ignored: expected a JSON array");
                return Ok(current);
            }
        };

        info!("Importing {} preset(s)", imported.len());
        let mut merged = current;
        merged.extend(imported);
        self.store.write_json(PRESETS_FILE, &merged).await?;
        Ok(merged)
    }
}

/// Valid presets from an import document, or `None` if it is not a JSON array
fn parse_import(json: &str) -> Option<Vec<Preset>> {
    let data: Value = serde_json::from_str(json).ok()?;
    let items = data.as_array()?;
    Some(items.iter().filter_map(Preset::from_import).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Mode;
    use serde_json::json;

    #[test]
    fn test_parse_import_filters_invalid_entries() {
        let doc = json!([
            { "id": "a", "name": "Strict", "settings": { "mode": "hard" }, "createdAt": "2024-01-01T00:00:00Z" },
            { "id": "b", "name": "", "settings": {} },
            { "name": "No id", "settings": {} },
            { "id": "c", "name": "No settings" },
            "not an object"
        ])
        .to_string();

        let presets = parse_import(&doc).unwrap();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].name, "Strict");
        assert_ne!(presets[0].id, "a");
        assert!(presets[0].id.starts_with("preset-"));
        assert_eq!(presets[0].settings.mode, Mode::Hard);
        assert_eq!(presets[0].created_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_parse_import_rejects_non_arrays() {
        assert!(parse_import("{\"id\": \"a\"}").is_none());
        assert!(parse_import("not json").is_none());
    }

    #[test]
    fn test_stored_preset_keeps_id_and_repairs_settings() {
        let value = json!({
            "id": "preset-kept",
            "name": "Hand edited",
            "settings": { "mode": "turbo", "toggles": { "questions": true } },
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-02-01T00:00:00Z"
        });
        let preset = Preset::from_stored(&value).unwrap();
        assert_eq!(preset.id, "preset-kept");
        assert_eq!(preset.settings.mode, Mode::Easy);
        assert!(preset.settings.toggles.questions);
        assert_eq!(preset.updated_at, "2024-02-01T00:00:00Z");

        assert!(Preset::from_stored(&json!({ "name": "No id" })).is_none());
        assert!(Preset::from_stored(&json!({ "id": "x", "name": "" })).is_none());
    }

    #[test]
    fn test_preset_json_shape() {
        let preset = Preset::new("Daily", Settings::for_mode(Mode::Medium));
        let value = serde_json::to_value(&preset).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["settings"]["mode"], "medium");
    }
}
