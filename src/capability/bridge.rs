//! Glue between the camera capability and the image store.
//!
//! Every capture outcome, whether it comes back from `take_photo` or from an
//! out-of-band camera callback, goes through the same translation:
//!
//! ```text
//! get_picture ──Ok(ref)──→ resolve_local_file_url ──Ok(entry)──→ Image { url }
//!      │                            │
//!      └──Err───────────────────────┴──Err──→ Error { message | tr("No data") }
//! ```
//!
//! There is no cancellation. Overlapping captures race and whichever
//! dispatch lands last wins.

use std::sync::{Arc, Weak};

use uuid::Uuid;

use crate::executor::Executor;
use crate::i18n::Translator;
use crate::ui::image::{ImageAction, ImageStore};

use super::camera::{Camera, CameraOptions, CameraResult};
use super::file::FileResolver;

/// Message key used when a failure carries no description.
pub const NO_DATA_KEY: &str = "No data";

/// Correlates the log lines of one capture.
pub type CaptureId = Uuid;

struct BridgeInner {
    camera: Arc<dyn Camera>,
    files: Arc<dyn FileResolver>,
    store: ImageStore,
    executor: Arc<dyn Executor>,
    translator: Arc<dyn Translator>,
    options: CameraOptions,
}

/// Sequences camera capture and file resolution into store dispatches.
#[derive(Clone)]
pub struct CaptureBridge {
    inner: Arc<BridgeInner>,
}

impl CaptureBridge {
    pub fn new(
        camera: Arc<dyn Camera>,
        files: Arc<dyn FileResolver>,
        store: ImageStore,
        executor: Arc<dyn Executor>,
        translator: Arc<dyn Translator>,
        options: CameraOptions,
    ) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                camera,
                files,
                store,
                executor,
                translator,
                options,
            }),
        }
    }

    /// Route out-of-band camera results into this bridge.
    ///
    /// The camera only keeps a weak reference, so it does not keep the
    /// bridge alive.
    pub fn start(&self) {
        let weak: Weak<BridgeInner> = Arc::downgrade(&self.inner);
        self.inner.camera.add_result_callback(Arc::new(move |result| {
            if let Some(inner) = weak.upgrade() {
                CaptureBridge { inner }.process_camera_result(result);
            } else {
                tracing::debug!("Camera result arrived after bridge was dropped");
            }
        }));
    }

    /// Start a capture and return immediately.
    ///
    /// The outcome reaches the store whenever the capture chain settles.
    pub fn take_photo(&self) -> CaptureId {
        let id = Uuid::new_v4();
        tracing::info!(capture_id = %id, "Capture requested");

        let bridge = self.clone();
        self.inner.executor.spawn(Box::pin(async move {
            let result = bridge
                .inner
                .camera
                .get_picture(&bridge.inner.options)
                .await;
            bridge.handle_result(id, result);
        }));
        id
    }

    /// Translate a camera result into a dispatch.
    ///
    /// Used directly for results the camera delivers outside `take_photo`.
    pub fn process_camera_result(&self, result: CameraResult) {
        let id = Uuid::new_v4();
        tracing::info!(capture_id = %id, "Out-of-band camera result");
        self.handle_result(id, result);
    }

    fn handle_result(&self, id: CaptureId, result: CameraResult) {
        match result {
            Ok(reference) => {
                tracing::debug!(capture_id = %id, reference = %reference, "Resolving captured file");
                let bridge = self.clone();
                self.inner.executor.spawn(Box::pin(async move {
                    match bridge.inner.files.resolve_local_file_url(&reference).await {
                        Ok(entry) => {
                            let url = entry.to_internal_url();
                            tracing::info!(capture_id = %id, url = %url, "Capture succeeded");
                            bridge.inner.store.dispatch(ImageAction::Image { url });
                        }
                        Err(e) => bridge.fail(id, e.message()),
                    }
                }));
            }
            Err(e) => self.fail(id, e.message),
        }
    }

    fn fail(&self, id: CaptureId, message: Option<String>) {
        let message = message.unwrap_or_else(|| self.inner.translator.tr(NO_DATA_KEY));
        tracing::warn!(capture_id = %id, error = %message, "Capture failed");
        self.inner.store.dispatch(ImageAction::Error { message });
    }
}
