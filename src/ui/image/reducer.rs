//! Reducer for the image feature.

use crate::ui::mvi::Reducer;

use super::action::ImageAction;
use super::state::ImageState;

/// Reducer for capture outcomes.
///
/// The previous state never leaks into the next one: each outcome replaces
/// both fields, which keeps url and error mutually exclusive.
pub struct ImageReducer;

impl Reducer for ImageReducer {
    type State = ImageState;
    type Action = ImageAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ImageAction::Image { url } => ImageState::with_url(url),
            ImageAction::Error { message } => ImageState::with_error(message),
        }
    }
}
