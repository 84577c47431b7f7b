use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Filter directives, overriding the verbosity flag.
const LOG_ENV: &str = "QUIRE_LOG";

/// Directory for per-process log files instead of stderr.
const LOG_DIR_ENV: &str = "QUIRE_LOG_DIR";

fn filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("quire=trace,debug")
		} else {
			EnvFilter::new("quire=info,warn")
		}
	})
}

pub fn setup_tracing(verbose: bool) {
	if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("quire.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry().with(filter(verbose)).with(file_layer).init();

			tracing::info!(path = ?log_path, "Tracing initialized");
			return;
		}
	}

	// stdout belongs to the command loop
	tracing_subscriber::fmt()
		.with_env_filter(filter(verbose))
		.with_writer(std::io::stderr)
		.init();
}
