//! Line commands accepted on stdin.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Open a file as a new tab of the current document.
	Open(PathBuf),
	/// Open an untitled tab in the current document.
	New,
	/// Open a new document, optionally with a file.
	Doc(Option<PathBuf>),
	/// Close the active tab of the current document.
	Close,
	/// Close the current document.
	CloseDoc,
	Next,
	Prev,
	/// Select a tab by its 1-based position.
	Select(usize),
	/// Switch to a document by its 1-based position.
	Switch(usize),
	/// Activate a theme everywhere.
	Theme(String),
	/// Apply a theme to the current document only.
	DocTheme(String),
	Themes,
	Tabs,
	Docs,
	Show,
	Help,
	Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("unknown command `{0}` (try `help`)")]
	Unknown(String),
	#[error("`{0}` needs an argument")]
	MissingArgument(&'static str),
	#[error("`{command}` expects a position, got `{got}`")]
	BadPosition { command: &'static str, got: String },
}

pub const HELP: &str = "\
open PATH      open PATH in a new tab
new            open an untitled tab
doc [PATH]     open a new document
close          close the active tab
closedoc       close the current document
next | prev    cycle tabs
select N       activate tab N
switch N       switch to document N
theme NAME     activate a theme for every document
doctheme NAME  apply a theme to the current document
themes | tabs | docs | show
quit";

impl Command {
	/// Parses one input line. Blank lines yield `None`.
	pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
		let line = line.trim();
		if line.is_empty() {
			return Ok(None);
		}
		let (head, rest) = match line.split_once(char::is_whitespace) {
			Some((head, rest)) => (head, rest.trim()),
			None => (line, ""),
		};
		let arg = (!rest.is_empty()).then_some(rest);

		let command = match head {
			"open" | "o" => Self::Open(required(arg, "open")?.into()),
			"new" => Self::New,
			"doc" => Self::Doc(arg.map(PathBuf::from)),
			"close" => Self::Close,
			"closedoc" => Self::CloseDoc,
			"next" | "n" => Self::Next,
			"prev" | "p" => Self::Prev,
			"select" => Self::Select(position(arg, "select")?),
			"switch" => Self::Switch(position(arg, "switch")?),
			"theme" => Self::Theme(required(arg, "theme")?.to_string()),
			"doctheme" => Self::DocTheme(required(arg, "doctheme")?.to_string()),
			"themes" => Self::Themes,
			"tabs" => Self::Tabs,
			"docs" => Self::Docs,
			"show" => Self::Show,
			"help" | "?" => Self::Help,
			"quit" | "exit" => Self::Quit,
			other => return Err(ParseError::Unknown(other.to_string())),
		};
		Ok(Some(command))
	}
}

fn required<'a>(arg: Option<&'a str>, command: &'static str) -> Result<&'a str, ParseError> {
	arg.ok_or(ParseError::MissingArgument(command))
}

fn position(arg: Option<&str>, command: &'static str) -> Result<usize, ParseError> {
	let arg = required(arg, command)?;
	match arg.parse::<usize>() {
		Ok(n) if n > 0 => Ok(n),
		_ => Err(ParseError::BadPosition {
			command,
			got: arg.to_string(),
		}),
	}
}
