//! Device capabilities and the bridge that feeds their outcomes into the
//! image store.

pub mod bridge;
pub mod camera;
pub mod file;

pub use bridge::{CaptureBridge, CaptureId, NO_DATA_KEY};
pub use camera::{
    Camera, CameraError, CameraOptions, CameraResult, CameraResultCallback, DestinationType,
    DirectoryCamera, EncodingType, MediaType, SourceType,
};
pub use file::{FileEntry, FileError, FileResolver, LocalFileResolver};
