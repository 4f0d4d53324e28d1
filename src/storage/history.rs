//! Recent refinements, newest first

use super::{create_id, now_timestamp, JsonStore};
use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::engine::RefinementResult;
use crate::error::Result;
use crate::settings::{sanitize_settings, Settings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub const HISTORY_FILE: &str = "history.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: String,
    pub input: String,
    pub settings: Settings,
    pub output: String,
    pub output_pack: String,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, settings: Settings, result: &RefinementResult) -> Self {
        Self {
            id: create_id("history"),
            timestamp: now_timestamp(),
            input: input.into(),
            settings,
            output: result.single.clone(),
            output_pack: result.pack.clone(),
        }
    }

    /// Rebuild an entry read back from `history.json`, repairing its settings
    fn from_stored(value: &Value) -> Option<Self> {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let id = text("id").filter(|id| !id.is_empty())?;
        Some(Self {
            id,
            timestamp: text("timestamp")?,
            input: text("input")?,
            settings: sanitize_settings(value.get("settings")),
            output: text("output")?,
            output_pack: text("outputPack")?,
        })
    }
}

pub struct HistoryStore {
    store: JsonStore,
    limit: usize,
}

impl HistoryStore {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Stored entries for display; an unreadable file shows as empty
    pub async fn load(&self) -> Vec<HistoryEntry> {
        self.load_stored().await.unwrap_or_else(|e| {
            warn!("Ignoring stored history: {}", e);
            Vec::new()
        })
    }

    async fn load_stored(&self) -> Result<Vec<HistoryEntry>> {
        let records = self.store.read_records(HISTORY_FILE).await?;
        let total = records.len();
        let history: Vec<HistoryEntry> = records
            .iter()
            .filter_map(HistoryEntry::from_stored)
            .collect();
        if history.len() < total {
            warn!(
                "Dropped {} unrecoverable history entries from {}",
                total - history.len(),
                HISTORY_FILE
            );
        }
        Ok(history)
    }

    /// Prepend `entry`, dropping the oldest entries beyond the limit.
    ///
    /// Fails without touching the file when the stored history cannot be read.
    pub async fn add(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>> {
        let mut history = self.load_stored().await?;
        history.insert(0, entry);
        history.truncate(self.limit);
        self.store.write_json(HISTORY_FILE, &history).await?;
        debug!("History now holds {} entries", history.len());
        Ok(history)
    }

    pub async fn clear(&self) -> Result<Vec<HistoryEntry>> {
        let empty: Vec<HistoryEntry> = Vec::new();
        self.store.write_json(HISTORY_FILE, &empty).await?;
        Ok(empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::refine;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_add_prepends_and_truncates() {
        let dir = TempDir::new().unwrap();
        let history = HistoryStore::new(JsonStore::new(dir.path())).with_limit(3);
        let settings = Settings::default();

        for i in 0..5 {
            let input = format!("input {}", i);
            let result = refine(&input, &settings);
            history
                .add(HistoryEntry::new(input, settings, &result))
                .await
                .unwrap();
        }

        let entries = history.load().await;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].input, "input 4");
        assert_eq!(entries[2].input, "input 2");
    }

    #[tokio::test]
    async fn test_entry_with_bad_settings_survives_add() {
        let dir = TempDir::new().unwrap();
        let stored = serde_json::json!([{
            "id": "history-old",
            "timestamp": "2024-01-01T00:00:00Z",
            "input": "old input",
            "settings": { "mode": "turbo" },
            "output": "old single",
            "outputPack": "old pack"
        }]);
        std::fs::write(dir.path().join(HISTORY_FILE), stored.to_string()).unwrap();

        let history = HistoryStore::new(JsonStore::new(dir.path()));
        let settings = Settings::default();
        let result = refine("new input", &settings);
        let entries = history
            .add(HistoryEntry::new("new input", settings, &result))
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, "history-old");
        assert_eq!(entries[1].settings, Settings::default());
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = TempDir::new().unwrap();
        let history = HistoryStore::new(JsonStore::new(dir.path()));
        let settings = Settings::default();
        let result = refine("hello", &settings);
        history
            .add(HistoryEntry::new("hello", settings, &result))
            .await
            .unwrap();

        assert!(history.clear().await.unwrap().is_empty());
        assert!(history.load().await.is_empty());
    }
}
