use crate::domain::ports::Storage;
use crate::utils::error::{ContactError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Plain files on the local filesystem.
///
/// Writes truncate and rewrite the target; a crash mid-write can leave a
/// partial file behind.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data)?;
        Ok(())
    }
}

/// Keeps files in memory. Backs repositories that should never touch disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage.files.borrow_mut().insert(path.into(), data.into());
        storage
    }

    /// Current content at `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            ContactError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_storage_overwrites_and_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("contacts.json");
        let storage = LocalStorage::new();

        assert!(!storage.exists(&path));
        storage.write_file(&path, b"[1,2,3]").unwrap();
        storage.write_file(&path, b"[]").unwrap();

        assert!(storage.exists(&path));
        assert_eq!(storage.read_file(&path).unwrap(), b"[]");
    }

    #[test]
    fn test_local_storage_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalStorage::new()
            .read_file(&temp_dir.path().join("absent.json"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_memory_storage() {
        let path = Path::new("contacts.json");
        let storage = MemoryStorage::with_file(path, "[]");
        assert!(storage.exists(path));
        storage.write_file(path, b"[ ]").unwrap();
        assert_eq!(storage.contents(path).unwrap(), b"[ ]");
        assert!(storage.read_file(Path::new("other.json")).unwrap_err().is_io());
    }
}
