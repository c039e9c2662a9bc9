//! Application wiring: one store, one bridge, one translator.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::capability::{
    Camera, CameraOptions, CaptureBridge, CaptureId, DirectoryCamera, FileResolver,
    LocalFileResolver,
};
use crate::config::Config;
use crate::executor::Executor;
use crate::i18n::{I18nError, I18nManager, Translator};
use crate::ui::image::{ImageState, ImageStore};

pub struct App {
    store: ImageStore,
    bridge: CaptureBridge,
    translator: Arc<dyn Translator>,
}

impl App {
    /// Build the app from configuration with the local directory camera.
    pub fn from_config(config: &Config, executor: Arc<dyn Executor>) -> Result<Self, I18nError> {
        let mut i18n = I18nManager::builtin(crate::i18n::DEFAULT_LANGUAGE)?;
        if let Some(dir) = &config.ui.catalog_dir {
            i18n.load_dir(dir)?;
        }
        i18n.set_language(&config.ui.language)?;

        let camera = DirectoryCamera::new(config.camera.resolved_source_dir());
        tracing::info!(
            source_dir = %camera.dir().display(),
            language = %i18n.language(),
            "Starting camshot"
        );

        Ok(Self::with_capabilities(
            Arc::new(camera),
            Arc::new(LocalFileResolver),
            Arc::new(i18n),
            config.camera.options.clone(),
            executor,
        ))
    }

    pub fn with_capabilities(
        camera: Arc<dyn Camera>,
        files: Arc<dyn FileResolver>,
        translator: Arc<dyn Translator>,
        options: CameraOptions,
        executor: Arc<dyn Executor>,
    ) -> Self {
        let store = ImageStore::default();
        let bridge = CaptureBridge::new(
            camera,
            files,
            store.clone(),
            executor,
            Arc::clone(&translator),
            options,
        );
        bridge.start();
        Self {
            store,
            bridge,
            translator,
        }
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn tr(&self, key: &str) -> String {
        self.translator.tr(key)
    }

    /// The "Take a photo" button.
    pub fn take_photo(&self) -> CaptureId {
        self.bridge.take_photo()
    }

    /// Take one photo and wait for its outcome to reach the store.
    pub async fn capture_once(&self) -> ImageState {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _subscription = self.store.subscribe(move |state: &ImageState| {
            let _ = tx.send(state.clone());
        });
        self.take_photo();
        rx.recv().await.unwrap_or_else(|| self.store.state())
    }

    /// Read commands line by line: empty line (or anything but `q`) takes a
    /// photo, `q` quits. Results are rendered by whatever view is mounted.
    pub async fn run_interactive<R, W>(&self, input: R, mut out: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "[ {} ]", self.tr("Take a photo"))?;
        writeln!(out, "{}", self.tr("Press Enter to take a photo, q to quit."))?;
        out.flush()?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().eq_ignore_ascii_case("q") {
                break;
            }
            self.take_photo();
            writeln!(out, "{}", self.tr("Capturing..."))?;
            out.flush()?;
        }
        Ok(())
    }
}
