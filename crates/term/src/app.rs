//! Command loop over a [`Workspace`].

use std::sync::Arc;

use quire_editor::msg::Dirty;
use quire_editor::{DocumentId, EditorError, Locator, Workspace};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP};
use crate::shell::TermShell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

pub struct App {
	workspace: Workspace,
	shell: Arc<TermShell>,
	current: Option<DocumentId>,
	out: Vec<String>,
}

impl App {
	/// `shell` must be the shell the workspace was built with.
	pub fn new(workspace: Workspace, shell: Arc<TermShell>) -> Self {
		let current = workspace.open_documents().last().copied();
		Self {
			workspace,
			shell,
			current,
			out: Vec::new(),
		}
	}

	/// Opens `files` as tabs of one new document, or an untitled document.
	pub fn open_initial(&mut self, files: impl IntoIterator<Item = Locator>) -> Result<DocumentId, EditorError> {
		let mut files = files.into_iter();
		let document = self.workspace.open_document(files.next())?;
		for locator in files {
			self.workspace.open_tab(document, Some(locator))?;
		}
		self.current = Some(document);
		Ok(document)
	}

	/// Reads commands from stdin and applies load completions until `quit`
	/// or end of input.
	pub async fn run(mut self) -> anyhow::Result<()> {
		let mut lines = BufReader::new(tokio::io::stdin()).lines();
		self.flush();

		loop {
			tokio::select! {
				line = lines.next_line() => {
					let Some(line) = line? else { break };
					let flow = match Command::parse(&line) {
						Ok(Some(command)) => self.execute(command),
						Ok(None) => Flow::Continue,
						Err(error) => {
							self.say(format!("error: {error}"));
							Flow::Continue
						}
					};
					if flow == Flow::Quit {
						break;
					}
				}
				dirty = self.workspace.next_message() => {
					tracing::trace!(?dirty, "Applied message");
				}
			}
			let dirty = self.workspace.drain_messages();
			if dirty.contains(Dirty::THEME) {
				self.say(format!("theme: {}", self.workspace.registry().active().name));
			}
			self.flush();
		}

		tracing::info!(documents = self.workspace.open_documents().len(), "Exiting");
		Ok(())
	}

	/// Runs one command, queueing its output.
	pub fn execute(&mut self, command: Command) -> Flow {
		tracing::debug!(?command, "Executing command");
		if let Err(error) = self.try_execute(command.clone()) {
			self.say(format!("error: {error}"));
		}
		if command == Command::Quit { Flow::Quit } else { Flow::Continue }
	}

	fn try_execute(&mut self, command: Command) -> Result<(), EditorError> {
		match command {
			Command::Open(path) => {
				self.open_in_current(Some(Locator::new(path)))?;
			}
			Command::New => {
				self.open_in_current(None)?;
			}
			Command::Doc(path) => {
				let document = self.workspace.open_document(path.map(Locator::new))?;
				self.current = Some(document);
				self.say(format!("{document}: opened"));
			}
			Command::Close => {
				let document = self.current()?;
				self.workspace.close_current_tab(document)?;
			}
			Command::CloseDoc => {
				let document = self.current()?;
				self.workspace.close_document(document)?;
			}
			Command::Next => {
				let document = self.current()?;
				self.workspace.document_mut(document)?.next_tab()?;
				self.show_tabs()?;
			}
			Command::Prev => {
				let document = self.current()?;
				self.workspace.document_mut(document)?.previous_tab()?;
				self.show_tabs()?;
			}
			Command::Select(position) => {
				let document = self.current()?;
				let doc = self.workspace.document_mut(document)?;
				let session = doc
					.tabs()
					.ids()
					.get(position - 1)
					.copied()
					.ok_or_else(|| EditorError::NotFound(format!("tab {position}")))?;
				doc.select_tab(session)?;
				self.show_tabs()?;
			}
			Command::Switch(position) => {
				let documents = self.workspace.open_documents();
				let document = documents
					.get(position - 1)
					.copied()
					.ok_or_else(|| EditorError::NotFound(format!("document {position}")))?;
				self.current = Some(document);
				self.show_tabs()?;
			}
			Command::Theme(name) => {
				let theme = self.workspace.select_theme(&name)?;
				self.say(format!("theme: {}", theme.name));
			}
			Command::DocTheme(name) => {
				let document = self.current()?;
				let theme = self.workspace.document_mut(document)?.change_theme_named(&name)?;
				self.say(format!("{document}: theme {}", theme.name));
			}
			Command::Themes => {
				let registry = self.workspace.registry().clone();
				let active = registry.active_id();
				for name in registry.names() {
					let marker = if name == active.as_str() { '*' } else { ' ' };
					self.say(format!("{marker} {name}"));
				}
			}
			Command::Tabs => self.show_tabs()?,
			Command::Docs => {
				let lines: Vec<String> = self
					.workspace
					.documents()
					.filter(|doc| !doc.is_closed())
					.enumerate()
					.map(|(i, doc)| {
						let marker = if Some(doc.id()) == self.current { '*' } else { ' ' };
						format!("{marker} {} {} [{}] {} tab(s)", i + 1, doc.title(), doc.state(), doc.tabs().len())
					})
					.collect();
				self.out.extend(lines);
			}
			Command::Show => {
				let document = self.current()?;
				let doc = self.workspace.document(document)?;
				let Some(editor) = doc.current_editor()? else {
					return Err(EditorError::NotFound("active tab".into()));
				};
				let header = if editor.is_loading() {
					format!("-- {} (loading) --", editor.title())
				} else {
					format!("-- {} [{}] --", editor.title(), editor.theme().name)
				};
				let text = editor.text();
				self.say(header);
				self.out.extend(text.lines().map(str::to_string));
			}
			Command::Help => self.out.extend(HELP.lines().map(str::to_string)),
			Command::Quit => {}
		}
		Ok(())
	}

	fn open_in_current(&mut self, locator: Option<Locator>) -> Result<(), EditorError> {
		match self.current() {
			Ok(document) => {
				self.workspace.open_tab(document, locator)?;
			}
			Err(_) => {
				let document = self.workspace.open_document(locator)?;
				self.current = Some(document);
				self.say(format!("{document}: opened"));
			}
		}
		Ok(())
	}

	/// The document commands act on. Falls back to the newest open document
	/// when the current one has closed.
	fn current(&mut self) -> Result<DocumentId, EditorError> {
		let open = self
			.current
			.and_then(|id| self.workspace.document(id).ok())
			.is_some_and(|doc| !doc.is_closed());
		if !open {
			self.current = self.workspace.open_documents().last().copied();
		}
		self.current.ok_or_else(|| EditorError::NotFound("open document".into()))
	}

	fn show_tabs(&mut self) -> Result<(), EditorError> {
		let document = self.current()?;
		let doc = self.workspace.document(document)?;
		let lines: Vec<String> = doc
			.tabs()
			.iter()
			.enumerate()
			.map(|(i, tab)| {
				let marker = if tab.is_active() { '*' } else { ' ' };
				let loading = if tab.is_loading() { " (loading)" } else { "" };
				format!("{marker} {} {}{loading}", i + 1, tab.title())
			})
			.collect();
		self.out.extend(lines);
		Ok(())
	}

	fn say(&mut self, line: String) {
		self.out.push(line);
	}

	/// Takes queued output and shell notices, then drops closed documents.
	pub fn take_output(&mut self) -> Vec<String> {
		let mut out = std::mem::take(&mut self.out);
		out.extend(self.shell.take().into_iter().map(|notice| notice.to_string()));
		self.workspace.prune_closed();
		out
	}

	fn flush(&mut self) {
		for line in self.take_output() {
			println!("{line}");
		}
	}
}
