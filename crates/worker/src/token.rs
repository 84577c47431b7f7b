use tokio_util::sync::CancellationToken;

/// Monotonic source of load generations for one owner.
///
/// Each request takes the next generation so completions can be matched
/// against the request that is still outstanding (latest wins).
#[derive(Debug, Default)]
pub struct LoadClock {
	next: u64,
}

impl LoadClock {
	/// Creates a clock whose first generation is 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the next generation.
	pub fn tick(&mut self) -> u64 {
		self.next = self.next.wrapping_add(1);
		self.next
	}
}

/// Generation-scoped cancellation handle for a pending load.
///
/// Clones share the same cancellation state. Children are cancelled with
/// their parent but never cancel it.
#[derive(Debug, Clone)]
pub struct LoadToken {
	generation: u64,
	cancel: CancellationToken,
}

impl LoadToken {
	/// Creates a root token for the given generation.
	pub fn new(generation: u64) -> Self {
		Self {
			generation,
			cancel: CancellationToken::new(),
		}
	}

	/// Returns the generation this token was issued for.
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns true when cancellation was requested.
	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	/// Requests cancellation.
	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	/// Future resolving when cancellation is requested.
	pub async fn cancelled(&self) {
		self.cancel.cancelled().await;
	}

	/// Creates a child token carrying a new generation.
	pub fn child(&self, generation: u64) -> Self {
		Self {
			generation,
			cancel: self.cancel.child_token(),
		}
	}
}
