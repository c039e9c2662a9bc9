use crate::ui::mvi::StoreState;

/// Result of the most recent capture.
///
/// At most one of `url` and `error_message` is set. The only way to build a
/// populated state from outside this module is through [`super::ImageReducer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageState {
    url: Option<String>,
    error_message: Option<String>,
}

impl StoreState for ImageState {}

impl ImageState {
    pub(super) fn with_url(url: String) -> Self {
        Self {
            url: Some(url),
            error_message: None,
        }
    }

    pub(super) fn with_error(message: String) -> Self {
        Self {
            url: None,
            error_message: Some(message),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True until the first capture outcome is dispatched.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.error_message.is_none()
    }
}
