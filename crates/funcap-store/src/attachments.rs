//! The binary attachment store behind the digital library.
//!
//! Records are keyed by the id the wizard assigned when the image was
//! captured; the report core reads them with a full scan, the way the
//! browser object store is queried. The report core never writes here.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use funcap_core::models::library::DigitalLibraryItem;

use crate::error::StorageError;

/// Read-only view over the id-keyed attachment records.
pub trait AttachmentStore {
    /// Full scan, in store order.
    fn get_all(&self) -> Result<Vec<DigitalLibraryItem>, StorageError>;

    fn get(&self, id: &str) -> Result<Option<DigitalLibraryItem>, StorageError> {
        Ok(self.get_all()?.into_iter().find(|item| item.id == id))
    }
}

/// In-memory attachment store; the test double.
#[derive(Debug, Default)]
pub struct MemoryAttachmentStore {
    items: RwLock<Vec<DigitalLibraryItem>>,
}

impl MemoryAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, as the capture step of the wizard would.
    pub fn insert(&self, item: DigitalLibraryItem) {
        self.items
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(item);
    }
}

impl AttachmentStore for MemoryAttachmentStore {
    fn get_all(&self) -> Result<Vec<DigitalLibraryItem>, StorageError> {
        Ok(self
            .items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }
}

/// Directory-backed attachment store: one `<id>.json` record per
/// attachment.
#[derive(Debug, Clone)]
pub struct FileAttachmentStore {
    dir: PathBuf,
}

impl FileAttachmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Seed a record, as the capture step of the wizard would.
    pub fn insert(&self, item: &DigitalLibraryItem) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let path = self.dir.join(format!("{}.json", item.id));
        let raw = serde_json::to_string_pretty(item)?;
        fs::write(&path, raw).map_err(|e| io_error(&path, e))
    }
}

impl AttachmentStore for FileAttachmentStore {
    fn get_all(&self) -> Result<Vec<DigitalLibraryItem>, StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.dir, e)),
        };

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.dir, e))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let raw = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
                items.push(serde_json::from_str(&raw)?);
            }
        }
        items.sort_by(|a: &DigitalLibraryItem, b: &DigitalLibraryItem| a.id.cmp(&b.id));
        Ok(items)
    }
}

fn io_error(path: &PathBuf, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
