use crate::core::data_source::ContactsDataSource;
use crate::domain::model::Contact;
use crate::domain::ports::{ContactRepository, Storage};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which fields a search criterion is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Given name and surname.
    #[default]
    Names,
    /// Names plus phone number, email and address.
    AllFields,
}

impl SearchScope {
    fn matches(self, contact: &Contact, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);
        let name = contact.full_name();

        match self {
            SearchScope::Names => contains(name.name()) || contains(name.sur_name()),
            SearchScope::AllFields => {
                contains(name.name())
                    || contains(name.sur_name())
                    || contains(contact.phone_number())
                    || contains(contact.email())
                    || contains(contact.address())
            }
        }
    }
}

/// The session's contact list, persisted through a [`ContactsDataSource`].
pub struct AppContactRepository<S: Storage> {
    data_source: ContactsDataSource<S>,
    contacts: Vec<Contact>,
    search_scope: SearchScope,
}

impl<S: Storage> AppContactRepository<S> {
    pub fn new(data_source: ContactsDataSource<S>, contacts: Vec<Contact>) -> Self {
        Self {
            data_source,
            contacts,
            search_scope: SearchScope::default(),
        }
    }

    /// Creates the store if needed and loads everything in it.
    pub fn load(data_source: ContactsDataSource<S>) -> Result<Self> {
        data_source.ensure_store()?;
        let contacts = data_source.read_contacts()?;
        tracing::info!(
            "Loaded {} contacts from {}",
            contacts.len(),
            data_source.path().display()
        );
        Ok(Self::new(data_source, contacts))
    }

    pub fn with_search_scope(mut self, scope: SearchScope) -> Self {
        self.search_scope = scope;
        self
    }

    pub fn search_scope(&self) -> SearchScope {
        self.search_scope
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn data_source(&self) -> &ContactsDataSource<S> {
        &self.data_source
    }

    fn position_of(&self, contact: &Contact) -> Option<usize> {
        self.contacts.iter().position(|c| c == contact)
    }
}

impl<S: Storage> ContactRepository for AppContactRepository<S> {
    fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
        tracing::debug!("Added contact, {} in list", self.contacts.len());
    }

    fn edit_contact(&mut self, old: &Contact, new: Contact) {
        match self.position_of(old) {
            Some(index) => {
                self.contacts[index] = new;
                tracing::debug!("Replaced contact at position {}", index);
            }
            None => tracing::warn!("Edit skipped: contact not found"),
        }
    }

    fn delete_contact(&mut self, contact: &Contact) {
        match self.position_of(contact) {
            Some(index) => {
                self.contacts.remove(index);
                tracing::debug!("Deleted contact at position {}", index);
            }
            None => tracing::warn!("Delete skipped: contact not found"),
        }
    }

    fn search_contact(&self, criterion: &str) -> Vec<Contact> {
        let needle = criterion.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| self.search_scope.matches(c, &needle))
            .cloned()
            .collect()
    }

    fn sort_contacts(&mut self, compare: &dyn Fn(&Contact, &Contact) -> Ordering) {
        // `sort_by` is stable.
        self.contacts.sort_by(|a, b| compare(a, b));
    }

    fn save_changes(&self) -> Result<()> {
        self.data_source.write_contacts(&self.contacts)
    }
}
