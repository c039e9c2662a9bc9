use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use camshot::app::App;
use camshot::cli::Cli;
use camshot::config::Config;
use camshot::executor::TokioExecutor;
use camshot::logging::init_tracing;
use camshot::ui::image::{TerminalRenderer, ViewBinding};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let app = App::from_config(&config, Arc::new(TokioExecutor::current()))
        .context("failed to load message catalogs")?;
    let view = ViewBinding::mount(app.store(), TerminalRenderer::new(std::io::stdout()));

    if cli.once {
        let state = app.capture_once().await;
        view.unmount();
        if state.error_message().is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let input = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = app.run_interactive(input, std::io::stdout()) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted"),
    }

    view.unmount();
    Ok(())
}
