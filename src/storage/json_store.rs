use crate::error::{ErrorCode, ErrorExt, PromptError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Reads and writes named JSON documents in one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read `name` as a JSON array of raw records.
    ///
    /// A missing file is an empty list. Unreadable files, malformed JSON and
    /// documents that are not arrays are errors, so callers never rewrite a
    /// file they could not parse.
    pub async fn read_records(&self, name: &str) -> Result<Vec<Value>> {
        let path = self.path_for(name);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} does not exist yet", path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(PromptError::storage_with_code(
                    ErrorCode::STORAGE_IO_ERROR,
                    format!("Failed to read {}", name),
                    Some(path),
                )
                .with_source(e));
            }
        };

        let corrupt = |message: String| {
            PromptError::storage_with_code(
                ErrorCode::STORAGE_CORRUPT_DATA,
                message,
                Some(path.clone()),
            )
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(records)) => Ok(records),
            Ok(_) => Err(corrupt(format!("{} does not hold a JSON array", name))),
            Err(e) => Err(corrupt(format!("{} is not valid JSON", name)).with_source(e)),
        }
    }

    /// Serialize `value` to `name`, creating the directory if needed
    pub async fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .to_storage_error(&self.root, "Failed to create data directory")?;

        let json = serde_json::to_string_pretty(value).map_err(|e| {
            PromptError::storage_with_code(
                ErrorCode::STORAGE_SERIALIZATION_ERROR,
                format!("Failed to serialize {}", name),
                None,
            )
            .with_source(e)
        })?;

        let final_path = self.path_for(name);
        let temp_path = self.path_for(&format!("{}.tmp", name));
        fs::write(&temp_path, json)
            .await
            .to_storage_error(&temp_path, "Failed to write temp file")?;
        fs::rename(&temp_path, &final_path)
            .await
            .to_storage_error(&final_path, "Failed to replace file")?;

        debug!("Wrote {}", final_path.display());
        Ok(())
    }
}
