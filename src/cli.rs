use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Take a photo and show it through a reactive store.
#[derive(Debug, Parser)]
#[command(name = "camshot", version)]
pub struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Message catalog language, e.g. "en" or "pl".
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Directory the camera picks captures from.
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Take a single photo, print the result and exit.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Overlay command-line flags on top of file configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(lang) = &self.lang {
            config.ui.language = lang.clone();
        }
        if let Some(dir) = &self.source_dir {
            config.camera.source_dir = Some(dir.clone());
        }
    }
}
