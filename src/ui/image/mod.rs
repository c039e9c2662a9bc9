//! Captured image feature.
//!
//! Holds the outcome of the last photo capture: either a URL the view can
//! load, or an error message to show in its place.
//!
//! # Architecture
//!
//! - `state.rs` - `ImageState` with mutually exclusive url/error fields
//! - `action.rs` - capture outcomes
//! - `reducer.rs` - state transitions
//! - `view.rs` - view projection and store binding

mod action;
mod reducer;
mod state;
mod view;

pub use action::ImageAction;
pub use reducer::ImageReducer;
pub use state::ImageState;
pub use view::{ImageView, Render, TerminalRenderer, ViewBinding};

/// Store specialised for the image feature.
pub type ImageStore = crate::ui::store::Store<ImageReducer>;
