//! Camera capability: options, errors and the device trait.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[default]
    Picture,
    Video,
    AllMedia,
}

/// Form in which the camera hands back its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    DataUrl,
    #[default]
    FileUri,
    NativeUri,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    PhotoLibrary,
    #[default]
    Camera,
    SavedPhotoAlbum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingType {
    #[default]
    Jpeg,
    Png,
}

impl EncodingType {
    /// File extensions accepted for this encoding, lowercase.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            EncodingType::Jpeg => &["jpg", "jpeg"],
            EncodingType::Png => &["png"],
        }
    }
}

/// Request configuration for a capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    pub media_type: MediaType,
    pub destination_type: DestinationType,
    pub source_type: SourceType,
    pub encoding_type: EncodingType,
    /// JPEG quality, 0..=100.
    pub quality: u8,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub correct_orientation: bool,
    pub save_to_photo_album: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            media_type: MediaType::Picture,
            destination_type: DestinationType::FileUri,
            source_type: SourceType::Camera,
            encoding_type: EncodingType::Jpeg,
            quality: 50,
            target_width: None,
            target_height: None,
            correct_orientation: false,
            save_to_photo_album: false,
        }
    }
}

/// Capture failure. Devices do not always explain themselves, so the
/// message is optional.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("camera error"))]
pub struct CameraError {
    pub message: Option<String>,
}

impl CameraError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }
}

/// Reference to the captured file, or why there is none.
pub type CameraResult = Result<String, CameraError>;

/// Callback for results the device delivers outside a `get_picture` call.
pub type CameraResultCallback = Arc<dyn Fn(CameraResult) + Send + Sync>;

#[async_trait]
pub trait Camera: Send + Sync {
    /// Take a picture and return a reference to it (a `file://` URI for
    /// [`DestinationType::FileUri`]).
    async fn get_picture(&self, options: &CameraOptions) -> CameraResult;

    /// Register a callback for results delivered out of band, e.g. after the
    /// host restarts the app while the camera was open.
    ///
    /// Default implementation never delivers anything.
    fn add_result_callback(&self, _callback: CameraResultCallback) {}
}

/// Camera that "captures" the newest matching image in a directory.
///
/// Stands in for device hardware on desktops: point it at the folder a
/// real camera or screenshot tool drops files into.
pub struct DirectoryCamera {
    dir: PathBuf,
}

impl DirectoryCamera {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[async_trait]
impl Camera for DirectoryCamera {
    async fn get_picture(&self, options: &CameraOptions) -> CameraResult {
        if options.media_type != MediaType::Picture {
            return Err(CameraError::new("Only pictures are supported"));
        }
        if options.destination_type != DestinationType::FileUri {
            return Err(CameraError::new("Only file URIs are supported"));
        }

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| CameraError::new(format!("{}: {}", self.dir.display(), e)))?;

        let extensions = options.encoding_type.extensions();
        let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CameraError::new(e.to_string()))?
        {
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if !matches {
                continue;
            }
            let Ok(meta) = entry.metadata().await else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            let modified = meta.modified().unwrap_or(std::time::UNIX_EPOCH);
            if newest.as_ref().map_or(true, |(t, _)| modified >= *t) {
                newest = Some((modified, path));
            }
        }

        match newest {
            Some((_, path)) => {
                tracing::debug!(path = %path.display(), "Picked captured file");
                Ok(format!("file://{}", path.display()))
            }
            // Mirrors a device that returns without data.
            None => Err(CameraError::without_message()),
        }
    }
}
