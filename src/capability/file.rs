//! Resolution of captured file references to loadable URLs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Why a file reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("Unsupported file reference '{reference}'")]
    UnsupportedScheme { reference: String },

    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The resolver failed without a usable description.
    #[error("file resolution failed")]
    Unknown,
}

impl FileError {
    /// Human-readable description, if the failure carries one.
    pub fn message(&self) -> Option<String> {
        match self {
            FileError::Unknown => None,
            other => Some(other.to_string()),
        }
    }
}

/// A file the view can load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    native_path: PathBuf,
}

impl FileEntry {
    pub fn new(native_path: impl Into<PathBuf>) -> Self {
        Self {
            native_path: native_path.into(),
        }
    }

    pub fn native_path(&self) -> &Path {
        &self.native_path
    }

    /// URL under which the view can load this file.
    pub fn to_internal_url(&self) -> String {
        format!("file://{}", self.native_path.display())
    }
}

#[async_trait]
pub trait FileResolver: Send + Sync {
    async fn resolve_local_file_url(&self, reference: &str) -> Result<FileEntry, FileError>;
}

/// Resolves `file://` references against the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileResolver;

#[async_trait]
impl FileResolver for LocalFileResolver {
    async fn resolve_local_file_url(&self, reference: &str) -> Result<FileEntry, FileError> {
        let Some(path) = reference.strip_prefix("file://") else {
            return Err(FileError::UnsupportedScheme {
                reference: reference.to_string(),
            });
        };

        let canonical = tokio::fs::canonicalize(path)
            .await
            .map_err(|_| FileError::NotFound {
                path: PathBuf::from(path),
            })?;

        Ok(FileEntry::new(canonical))
    }
}
