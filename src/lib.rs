//! camshot - a reactive store driven by a camera capability.
//!
//! A button press starts a capture through [`capability::CaptureBridge`].
//! The bridge resolves the captured file and dispatches the outcome into an
//! [`ui::image::ImageStore`], whose subscribers (the mounted view) re-render.

pub mod app;
pub mod capability;
pub mod cli;
pub mod config;
pub mod executor;
pub mod i18n;
pub mod logging;
pub mod ui;
