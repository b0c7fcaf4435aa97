use crate::domain::model::Contact;
use crate::utils::error::Result;
use std::cmp::Ordering;
use std::path::Path;

/// Byte-level access to the place contacts are persisted.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Replaces the whole content at `path`.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

/// Operations every contact repository offers, whatever backs it.
///
/// Mutations only touch the in-memory list; callers persist them with
/// [`ContactRepository::save_changes`].
pub trait ContactRepository {
    fn add_contact(&mut self, contact: Contact);

    /// Replaces the first contact equal to `old` with `new`, keeping its position.
    /// Does nothing when no contact matches.
    fn edit_contact(&mut self, old: &Contact, new: Contact);

    /// Removes the first contact equal to `contact`. Does nothing when none matches.
    fn delete_contact(&mut self, contact: &Contact);

    /// Contacts whose given name or surname contains `criterion`, ignoring case,
    /// in list order. An empty criterion returns every contact.
    fn search_contact(&self, criterion: &str) -> Vec<Contact>;

    /// Stable in-place sort with the supplied ordering.
    fn sort_contacts(&mut self, compare: &dyn Fn(&Contact, &Contact) -> Ordering);

    fn save_changes(&self) -> Result<()>;
}
