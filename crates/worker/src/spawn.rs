use std::future::Future;
use std::sync::OnceLock;

use tokio::task::JoinHandle;

use crate::TaskClass;

fn runtime_handle() -> tokio::runtime::Handle {
	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		return handle;
	}

	static GLOBAL_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = GLOBAL_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(2)
			.thread_name("quire-worker-global")
			.build()
			.expect("failed to build quire-worker global tokio runtime")
	});
	runtime.handle().clone()
}

/// Spawns an async task tagged with its worker class.
///
/// Runs on the caller's runtime when one is active, otherwise on a lazily
/// built global runtime.
pub fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(worker_class = class.as_str(), "worker.spawn");
	runtime_handle().spawn(fut)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test(flavor = "current_thread")]
	async fn spawn_runs_on_current_runtime() {
		let handle = spawn(TaskClass::ContentLoad, async { 40 + 2 });
		assert_eq!(handle.await.unwrap(), 42);
	}

	#[test]
	fn spawn_without_runtime_uses_global() {
		let (tx, rx) = std::sync::mpsc::channel();
		spawn(TaskClass::ContentLoad, async move {
			let _ = tx.send(7);
		});
		let value = rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
		assert_eq!(value, 7);
	}
}
