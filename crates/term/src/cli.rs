use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "A multi-tab document coordinator")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Files to open as tabs of the first document (untitled tab if omitted)
	pub files: Vec<PathBuf>,

	/// Theme to activate, overriding the config file
	#[arg(long, short = 't')]
	pub theme: Option<String>,

	/// Config file to load instead of the default location
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
