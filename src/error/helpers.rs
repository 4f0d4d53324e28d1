use super::{ErrorCode, PromptError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    fn to_config_error(self, message: impl Into<String>) -> Result<T, PromptError>;
    fn to_storage_error(self, path: &Path, message: impl Into<String>) -> Result<T, PromptError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, PromptError> {
        self.map_err(|e| PromptError::config(message).with_source(e))
    }

    fn to_storage_error(self, path: &Path, message: impl Into<String>) -> Result<T, PromptError> {
        self.map_err(|e| {
            PromptError::storage_with_code(
                ErrorCode::STORAGE_IO_ERROR,
                message,
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })
    }
}
