//! Quire terminal frontend.
//!
//! Opens the files given on the command line as tabs of one document, then
//! reads line commands from stdin (`help` lists them) while load
//! completions are applied in the background.

mod app;
mod cli;
mod command;
mod logging;
mod shell;

use std::sync::Arc;

use anyhow::Context;
use app::App;
use clap::Parser;
use cli::Cli;
use quire_config::Config;
use quire_editor::{FsStorage, Locator, Workspace};
use quire_theme::ThemeRegistry;
use shell::TermShell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => Config::load_default().context("loading config")?,
	};

	let registry = Arc::new(ThemeRegistry::new());
	registry.subscribe(|theme| tracing::info!(theme = %theme.name, "Theme activated"));
	for (path, error) in config.apply(&registry)? {
		tracing::warn!(path = %path.display(), %error, "Skipping theme file");
	}
	if let Some(name) = &cli.theme {
		registry.set_active_by_name(name)?;
	}
	tracing::info!(theme = %registry.active().name, themes = registry.len(), "Themes ready");

	let shell = Arc::new(TermShell::default());
	let workspace = Workspace::new(registry, Arc::new(FsStorage)).with_shell(shell.clone());
	let mut app = App::new(workspace, shell);
	app.open_initial(cli.files.into_iter().map(Locator::new))?;

	app.run().await
}
