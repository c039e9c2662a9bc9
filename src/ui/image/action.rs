//! Actions for the image feature.

use crate::ui::mvi::Action;

/// Outcome of a capture, dispatched by the capability bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageAction {
    /// The photo was captured and resolved to a loadable URL.
    Image { url: String },

    /// Capture or resolution failed.
    Error { message: String },
}

impl Action for ImageAction {}
