//! Persistent slots holding the serialized roster.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::StoreConfig;

/// Errors from reading or writing a slot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, {capacity} available")]
    QuotaExceeded { needed: usize, capacity: usize },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A single key-value location that holds the whole roster.
///
/// Writes replace the previous contents entirely; the last writer wins.
pub trait StorageSlot {
    /// Read the stored contents, or `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored contents.
    fn write(&mut self, contents: &str) -> Result<(), StorageError>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for Box<S> {
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        (**self).write(contents)
    }
}

/// In-memory slot, optionally bounded to simulate a storage quota.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    capacity: Option<usize>,
}

impl MemorySlot {
    /// Create an empty, unbounded slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            capacity: None,
        }
    }

    /// Limit writes to `capacity` bytes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Current contents, for inspection.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity
            && contents.len() > capacity
        {
            return Err(StorageError::QuotaExceeded {
                needed: contents.len(),
                capacity,
            });
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// Slot backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Use the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `<dir>/<storage_key>.json`.
    pub fn in_dir(dir: &Path, config: &StoreConfig) -> Self {
        Self::new(dir.join(format!("{}.json", config.storage_key)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so readers never see a torn file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
