use std::collections::BTreeMap;

use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: BTreeMap<i64, Contact>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryStore {
    fn insert(&mut self, contact: &Contact) -> Result<i64> {
        self.next_id += 1;
        let id = self.next_id;
        let mut stored = contact.clone();
        stored.id = id;
        self.contacts.insert(id, stored);
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn update(&mut self, contact: &Contact) -> Result<()> {
        if let Some(existing) = self.contacts.get_mut(&contact.id) {
            *existing = contact.clone();
        }
        Ok(())
    }

    fn delete(&mut self, contact: &Contact) -> Result<()> {
        self.contacts.remove(&contact.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = InMemoryStore::new();
        let first = store.insert(&Contact::new("", "1", "a@x.com", "Ann")).unwrap();
        let second = store.insert(&Contact::new("", "2", "b@x.com", "Bob")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut store = InMemoryStore::new();
        store.insert(&Contact::new("", "1", "a@x.com", "Ann")).unwrap();

        let mut ghost = Contact::new("", "9", "g@x.com", "Ghost");
        ghost.id = 42;
        store.update(&ghost).unwrap();
        store.delete(&ghost).unwrap();

        let contacts = store.list().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ann");
    }
}
