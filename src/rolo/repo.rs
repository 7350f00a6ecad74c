//! # Repository
//!
//! [`ContactRepository`] decouples the presentation layer from the concrete
//! storage technology: the view model only ever sees this facade, so
//! [`SqliteStore`](crate::store::sqlite::SqliteStore) could be replaced by
//! any other [`ContactStore`] without touching presentation code.
//!
//! The repository also owns the **live feed**: a watch channel carrying the
//! full current contact list. After every successful mutation the snapshot
//! is re-published, so subscribers observe each change without polling. A
//! mutation that leaves the table as it was (update or delete of an unknown
//! id) does not wake subscribers.

use std::sync::Mutex;

use tokio::sync::watch;

use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactStore;

pub struct ContactRepository<S: ContactStore> {
    // All writes funnel through this mutex, which is what serializes
    // concurrent intents regardless of backend.
    store: Mutex<S>,
    feed: watch::Sender<Vec<Contact>>,
}

impl<S: ContactStore> ContactRepository<S> {
    /// Wrap a store, priming the feed with its current contents.
    pub fn new(store: S) -> Result<Self> {
        let initial = store.list()?;
        let (feed, _) = watch::channel(initial);
        Ok(Self {
            store: Mutex::new(store),
            feed,
        })
    }

    /// Subscribe to the live feed. The receiver starts out holding the
    /// latest snapshot and is notified on every subsequent change.
    pub fn all_contacts(&self) -> watch::Receiver<Vec<Contact>> {
        self.feed.subscribe()
    }

    pub fn insert(&self, contact: &Contact) -> Result<i64> {
        let mut store = self.store.lock().unwrap();
        let id = store.insert(contact)?;
        self.publish(&*store)?;
        Ok(id)
    }

    pub fn update(&self, contact: &Contact) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        store.update(contact)?;
        self.publish(&*store)
    }

    pub fn delete(&self, contact: &Contact) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        store.delete(contact)?;
        self.publish(&*store)
    }

    fn publish(&self, store: &S) -> Result<()> {
        let snapshot = store.list()?;
        self.feed.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn sample(name: &str) -> Contact {
        Contact::new("", "123", "a@x.com", name)
    }

    #[test]
    fn feed_is_primed_with_existing_rows() {
        let mut store = InMemoryStore::new();
        store.insert(&sample("Ann")).unwrap();
        store.insert(&sample("Bob")).unwrap();

        let repo = ContactRepository::new(store).unwrap();
        assert_eq!(repo.all_contacts().borrow().len(), 2);
    }

    #[test]
    fn mutations_are_pushed_to_subscribers() {
        let repo = ContactRepository::new(InMemoryStore::new()).unwrap();
        let rx = repo.all_contacts();

        let id = repo.insert(&sample("Ann")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow().len(), 1);
        assert_eq!(rx.borrow()[0].id, id);
    }

    #[test]
    fn noop_delete_does_not_wake_subscribers() {
        let repo = ContactRepository::new(InMemoryStore::new()).unwrap();
        repo.insert(&sample("Ann")).unwrap();

        let rx = repo.all_contacts();
        assert!(!rx.has_changed().unwrap());

        let mut ghost = sample("Ghost");
        ghost.id = 404;
        repo.delete(&ghost).unwrap();

        assert!(!rx.has_changed().unwrap());
        assert_eq!(rx.borrow().len(), 1);
    }

    // Full lifecycle: insert, update the phone number in place, delete.
    #[test]
    fn insert_update_delete_lifecycle() {
        let repo = ContactRepository::new(InMemoryStore::new()).unwrap();
        let rx = repo.all_contacts();

        let id = repo
            .insert(&Contact::new("", "123", "a@x.com", "Ann"))
            .unwrap();
        {
            let feed = rx.borrow();
            assert_eq!(feed.len(), 1);
            assert_eq!(feed[0].name, "Ann");
            assert_eq!(feed[0].phone_number, "123");
            assert_eq!(feed[0].image, "");
        }

        let mut ann = rx.borrow()[0].clone();
        ann.phone_number = "999".to_string();
        repo.update(&ann).unwrap();
        {
            let feed = rx.borrow();
            assert_eq!(feed.len(), 1);
            assert_eq!(feed[0].id, id);
            assert_eq!(feed[0].phone_number, "999");
            assert_eq!(feed[0].name, "Ann");
            assert_eq!(feed[0].email, "a@x.com");
        }

        let ann = rx.borrow()[0].clone();
        repo.delete(&ann).unwrap();
        assert!(rx.borrow().is_empty());
    }
}
