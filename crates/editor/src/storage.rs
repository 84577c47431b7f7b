//! Storage collaborator: supplies raw bytes for a locator.

use std::collections::HashMap;
use std::io;

use async_trait::async_trait;
use parking_lot::RwLock;
use ropey::Rope;
use thiserror::Error;

use crate::Locator;

/// Failure reading or decoding a locator's content.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Nothing exists at the locator.
	#[error("no such file")]
	NotFound,

	/// The underlying read failed.
	#[error("{0}")]
	Io(#[from] io::Error),

	/// The bytes are not valid UTF-8 text.
	#[error("content is not valid UTF-8")]
	InvalidUtf8,
}

/// Asynchronous, cancellable source of document content.
///
/// Cancellation is cooperative: the coordinator drops the read future when
/// the requesting tab goes away, so implementations must be cancel-safe.
#[async_trait]
pub trait Storage: Send + Sync {
	async fn read(&self, locator: &Locator) -> Result<Vec<u8>, StorageError>;
}

/// Reads locators as filesystem paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

#[async_trait]
impl Storage for FsStorage {
	async fn read(&self, locator: &Locator) -> Result<Vec<u8>, StorageError> {
		match tokio::fs::read(locator.path()).await {
			Ok(bytes) => Ok(bytes),
			Err(error) if error.kind() == io::ErrorKind::NotFound => Err(StorageError::NotFound),
			Err(error) => Err(error.into()),
		}
	}
}

/// In-memory storage keyed by locator.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	files: RwLock<HashMap<Locator, Vec<u8>>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, locator: impl Into<Locator>, content: impl Into<Vec<u8>>) {
		self.files.write().insert(locator.into(), content.into());
	}

	pub fn remove(&self, locator: &Locator) -> Option<Vec<u8>> {
		self.files.write().remove(locator)
	}
}

#[async_trait]
impl Storage for MemoryStorage {
	async fn read(&self, locator: &Locator) -> Result<Vec<u8>, StorageError> {
		self.files.read().get(locator).cloned().ok_or(StorageError::NotFound)
	}
}

/// Decodes raw bytes into a line-feed normalized rope.
pub(crate) fn decode(bytes: Vec<u8>) -> Result<Rope, StorageError> {
	let text = String::from_utf8(bytes).map_err(|_| StorageError::InvalidUtf8)?;
	Ok(Rope::from_str(&normalize_to_lf(text)))
}

fn normalize_to_lf(text: String) -> String {
	if text.contains('\r') {
		text.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		text
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_normalizes_line_endings() {
		let rope = decode(b"a\r\nb\rc\n".to_vec()).unwrap();
		assert_eq!(rope.to_string(), "a\nb\nc\n");
	}

	#[test]
	fn decode_rejects_invalid_utf8() {
		assert!(matches!(decode(vec![0xff, 0xfe]), Err(StorageError::InvalidUtf8)));
	}

	#[tokio::test(flavor = "current_thread")]
	async fn memory_storage_reads_inserted_content() {
		let storage = MemoryStorage::new();
		storage.insert("a.txt", "hello");
		assert_eq!(storage.read(&Locator::from("a.txt")).await.unwrap(), b"hello");
		assert!(matches!(storage.read(&Locator::from("b.txt")).await, Err(StorageError::NotFound)));
	}

	#[tokio::test(flavor = "current_thread")]
	async fn fs_storage_maps_missing_files_to_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("present.txt");
		std::fs::write(&path, "on disk").unwrap();

		assert_eq!(FsStorage.read(&Locator::new(&path)).await.unwrap(), b"on disk");
		let missing = Locator::new(dir.path().join("absent.txt"));
		assert!(matches!(FsStorage.read(&missing).await, Err(StorageError::NotFound)));
	}
}
