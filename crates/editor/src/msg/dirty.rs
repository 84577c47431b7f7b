use bitflags::bitflags;

bitflags! {
	/// What changed as a result of applying a message or command.
	#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
	pub struct Dirty: u8 {
		/// A session's content was replaced.
		const CONTENT = 1;
		/// Sessions received a new theme.
		const THEME = 1 << 1;
		/// Tabs were added, removed or re-activated, or a document closed.
		const TABS = 1 << 2;
	}
}

impl Dirty {
	pub const NONE: Self = Self::empty();
}

#[cfg(test)]
mod tests;
