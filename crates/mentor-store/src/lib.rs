//! # mentor-store
//!
//! Durable persistence of insight records behind an injected key-value
//! storage backend.
//!
//! - [`KeyValueStorage`]: the storage seam (`read`/`write` of string documents)
//! - [`MemoryStorage`]: in-process backend, optionally with a byte quota
//! - [`FileStorage`]: one JSON file per key, written atomically
//! - [`InsightStore`]: `load`/`save`/`upsert` of the insight document
//!
//! Insights are an enhancement, not a system of record: every storage or
//! parse failure inside [`InsightStore`] is logged and degrades to "no
//! insights" instead of propagating.

pub mod error;
pub mod file;
pub mod insight_store;
pub mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use insight_store::{InsightStore, UpsertOutcome};
pub use memory::MemoryStorage;

/// A string-document key-value backend.
///
/// Whole documents are read and overwritten by key; there are no partial updates.
pub trait KeyValueStorage {
    /// Read the document stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
