//! Shared test utilities: scripted capabilities and a wired-up bridge.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use camshot::capability::{
    Camera, CameraError, CameraOptions, CameraResult, CameraResultCallback, CaptureBridge,
    FileEntry, FileError, FileResolver,
};
use camshot::executor::QueueExecutor;
use camshot::i18n::I18nManager;
use camshot::ui::image::{ImageStore, ImageView, Render};
use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Camera whose captures complete only when the test says so.
#[derive(Default)]
pub struct ScriptedCamera {
    pending: Mutex<VecDeque<oneshot::Receiver<CameraResult>>>,
    callbacks: Mutex<Vec<CameraResultCallback>>,
    calls: Mutex<Vec<CameraOptions>>,
}

impl ScriptedCamera {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Prepare the next `get_picture` call. The capture stays pending until
    /// the returned sender is used.
    pub fn expect_capture(&self) -> oneshot::Sender<CameraResult> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push_back(rx);
        tx
    }

    /// Deliver a result outside any `get_picture` call.
    pub fn fire(&self, result: CameraResult) {
        let callbacks: Vec<_> = self.callbacks.lock().clone();
        for callback in callbacks {
            callback(result.clone());
        }
    }

    pub fn calls(&self) -> Vec<CameraOptions> {
        self.calls.lock().clone()
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.lock().len()
    }
}

#[async_trait]
impl Camera for ScriptedCamera {
    async fn get_picture(&self, options: &CameraOptions) -> CameraResult {
        self.calls.lock().push(options.clone());
        let next = self.pending.lock().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(CameraError::new("capture abandoned"))),
            None => Err(CameraError::new("unexpected capture")),
        }
    }

    fn add_result_callback(&self, callback: CameraResultCallback) {
        self.callbacks.lock().push(callback);
    }
}

/// Resolves `file://x` to `x` without touching the filesystem, unless a
/// failure has been queued.
#[derive(Default)]
pub struct FakeResolver {
    failures: Mutex<VecDeque<FileError>>,
}

impl FakeResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_next(&self, error: FileError) {
        self.failures.lock().push_back(error);
    }
}

#[async_trait]
impl FileResolver for FakeResolver {
    async fn resolve_local_file_url(&self, reference: &str) -> Result<FileEntry, FileError> {
        let failure = self.failures.lock().pop_front();
        if let Some(error) = failure {
            return Err(error);
        }
        let path = reference.strip_prefix("file://").unwrap_or(reference);
        Ok(FileEntry::new(path))
    }
}

/// Renderer that remembers every view it was asked to draw.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Arc<Mutex<Vec<ImageView>>>,
}

impl Render for RecordingRenderer {
    fn render(&mut self, view: &ImageView) {
        self.frames.lock().push(view.clone());
    }
}

/// Bridge wired to scripted capabilities and a deterministic executor.
pub struct Harness {
    pub executor: QueueExecutor,
    pub store: ImageStore,
    pub camera: Arc<ScriptedCamera>,
    pub files: Arc<FakeResolver>,
    pub bridge: CaptureBridge,
}

pub fn harness(language: &str) -> Harness {
    let executor = QueueExecutor::new();
    let store = ImageStore::default();
    let camera = ScriptedCamera::new();
    let files = FakeResolver::new();
    let translator = Arc::new(I18nManager::builtin(language).expect("builtin catalogs"));

    let bridge = CaptureBridge::new(
        camera.clone(),
        files.clone(),
        store.clone(),
        Arc::new(executor.clone()),
        translator,
        CameraOptions::default(),
    );
    bridge.start();

    Harness {
        executor,
        store,
        camera,
        files,
        bridge,
    }
}
