/// What a spawned task does, recorded on every spawn for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Reads a tab's content from storage. Cancelled when the tab goes away.
	ContentLoad,
}

impl TaskClass {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::ContentLoad => "content_load",
		}
	}
}
