//! Declarative view for the image feature and its binding to the store.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::store::Subscription;

use super::state::ImageState;
use super::ImageStore;

/// What the image panel shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageView {
    /// Nothing captured yet.
    Empty,
    /// The error message replaces the image.
    Error(String),
    /// The captured image.
    Image { url: String },
}

impl From<&ImageState> for ImageView {
    fn from(state: &ImageState) -> Self {
        if let Some(message) = state.error_message() {
            ImageView::Error(message.to_string())
        } else if let Some(url) = state.url() {
            ImageView::Image {
                url: url.to_string(),
            }
        } else {
            ImageView::Empty
        }
    }
}

/// Render target for [`ImageView`] trees.
pub trait Render: Send {
    fn render(&mut self, view: &ImageView);
}

/// Writes one line per render to any writer (stdout in the binary).
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Render for TerminalRenderer<W> {
    fn render(&mut self, view: &ImageView) {
        let result = match view {
            ImageView::Empty => Ok(()),
            ImageView::Error(message) => writeln!(self.out, "  ✗ {}", message),
            ImageView::Image { url } => writeln!(self.out, "  ✓ {}", url),
        };
        if let Err(e) = result.and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to render image view");
        }
    }
}

/// A mounted view: renders once on mount, then on every store notification.
///
/// Unmounting (or dropping) the binding unsubscribes from the store.
pub struct ViewBinding {
    subscription: Subscription<ImageState>,
}

impl ViewBinding {
    pub fn mount<R: Render + 'static>(store: &ImageStore, renderer: R) -> Self {
        let renderer = Arc::new(Mutex::new(renderer));

        // Subscribe before the first render so no dispatch slips between the
        // two. Holding the renderer makes any concurrent notification wait
        // until the initial snapshot is on screen.
        let mut first = renderer.lock();
        let target = Arc::clone(&renderer);
        let subscription = store.subscribe(move |state| {
            target.lock().render(&ImageView::from(state));
        });
        first.render(&ImageView::from(&store.state()));
        drop(first);

        tracing::debug!(subscription = ?subscription.id(), "Image view mounted");
        Self { subscription }
    }

    pub fn unmount(self) {
        tracing::debug!(subscription = ?self.subscription.id(), "Image view unmounted");
        self.subscription.unsubscribe();
    }
}
