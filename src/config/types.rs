use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::capability::CameraOptions;
use crate::i18n::DEFAULT_LANGUAGE;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language of the message catalog (e.g., "en", "pl").
    #[serde(default = "default_language")]
    pub language: String,
    /// Extra directory with `messages-<lang>.json` catalogs.
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

/// Camera settings: where captures come from plus the capture request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Directory the directory camera picks captures from.
    /// Falls back to the user's picture directory.
    #[serde(default)]
    pub source_dir: Option<PathBuf>,
    #[serde(flatten)]
    pub options: CameraOptions,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            catalog_dir: None,
        }
    }
}

impl CameraConfig {
    /// Configured source directory, else the platform picture directory,
    /// else the current directory.
    pub fn resolved_source_dir(&self) -> PathBuf {
        self.source_dir
            .clone()
            .or_else(dirs::picture_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
