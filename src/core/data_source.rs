use crate::core::codec;
use crate::domain::model::Contact;
use crate::domain::ports::Storage;
use crate::utils::error::{ContactError, Result};
use std::path::{Path, PathBuf};

/// Reads and writes the complete contact list at a fixed path.
#[derive(Debug)]
pub struct ContactsDataSource<S: Storage> {
    storage: S,
    path: PathBuf,
}

impl<S: Storage> ContactsDataSource<S> {
    pub fn new(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes an empty list when nothing is stored yet. Returns `true` if it did.
    pub fn ensure_store(&self) -> Result<bool> {
        if self.storage.exists(&self.path) {
            return Ok(false);
        }

        tracing::info!("Creating empty contact store at {}", self.path.display());
        self.write_contacts(&[])?;
        Ok(true)
    }

    pub fn read_contacts(&self) -> Result<Vec<Contact>> {
        let data = self.storage.read_file(&self.path)?;
        let text = String::from_utf8(data).map_err(|e| ContactError::InvalidEncodingError {
            message: format!("{}: {}", self.path.display(), e),
        })?;

        let contacts = codec::decode(&text)?;
        tracing::debug!(
            "Read {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    /// Replaces the stored list with `contacts`.
    pub fn write_contacts(&self, contacts: &[Contact]) -> Result<()> {
        let text = codec::encode(contacts)?;
        self.storage.write_file(&self.path, text.as_bytes())?;
        tracing::debug!(
            "Wrote {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::domain::model::FullName;
    use chrono::NaiveDate;

    fn contact(name: &str) -> Contact {
        Contact::new(
            FullName::new(name, "Doe"),
            "555",
            "x@y.z",
            NaiveDate::from_ymd_opt(1985, 7, 14).unwrap(),
            "Main st.",
        )
    }

    #[test]
    fn test_ensure_store_creates_empty_list_once() {
        let source = ContactsDataSource::new(MemoryStorage::new(), "contacts.json");
        assert!(source.ensure_store().unwrap());
        assert!(!source.ensure_store().unwrap());
        assert_eq!(
            source.storage().contents(Path::new("contacts.json")).unwrap(),
            b"[]"
        );
        assert!(source.read_contacts().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_store_keeps_existing_content() {
        let source = ContactsDataSource::new(MemoryStorage::new(), "contacts.json");
        source.write_contacts(&[contact("Jane")]).unwrap();
        assert!(!source.ensure_store().unwrap());
        assert_eq!(source.read_contacts().unwrap().len(), 1);
    }

    #[test]
    fn test_write_replaces_whole_list() {
        let source = ContactsDataSource::new(MemoryStorage::new(), "contacts.json");
        source
            .write_contacts(&[contact("A"), contact("B"), contact("C")])
            .unwrap();
        source.write_contacts(&[contact("D")]).unwrap();

        assert_eq!(source.read_contacts().unwrap(), vec![contact("D")]);
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let source = ContactsDataSource::new(MemoryStorage::new(), "contacts.json");
        assert!(source.read_contacts().unwrap_err().is_io());
    }

    #[test]
    fn test_read_corrupt_content_is_format_error() {
        let storage = MemoryStorage::with_file("contacts.json", "{not json");
        let source = ContactsDataSource::new(storage, "contacts.json");
        assert!(source.read_contacts().unwrap_err().is_format());

        let storage = MemoryStorage::with_file("contacts.json", vec![0xff, 0xfe, b'[']);
        let source = ContactsDataSource::new(storage, "contacts.json");
        assert!(matches!(
            source.read_contacts().unwrap_err(),
            ContactError::InvalidEncodingError { .. }
        ));
    }
}
