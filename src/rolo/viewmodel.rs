//! # Presentation-State Holder
//!
//! [`ContactViewModel`] is the layer a UI talks to. It adapts the
//! repository's live feed for observation and turns user intents (add,
//! update, delete) into background writes so the rendering path never
//! blocks on the database.
//!
//! Every intent is dispatched as one blocking task owned by the holder's
//! [`JoinSet`]. Intents are fire-and-forget: the live feed is the success
//! signal. Dropping the holder aborts tasks that have not started, so no
//! write outlives the scope that issued it (a task already inside the store
//! call runs to completion, which is fine because each intent is a single
//! atomic store operation).

use std::sync::Arc;

use log::error;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::error::{Result, RoloError};
use crate::model::Contact;
use crate::repo::ContactRepository;
use crate::store::ContactStore;

pub struct ContactViewModel<S: ContactStore> {
    repo: Arc<ContactRepository<S>>,
    tasks: JoinSet<Result<()>>,
}

impl<S: ContactStore> ContactViewModel<S> {
    pub fn new(repo: Arc<ContactRepository<S>>) -> Self {
        Self {
            repo,
            tasks: JoinSet::new(),
        }
    }

    /// Live feed of the full contact list for the UI to observe.
    pub fn all_contacts(&self) -> watch::Receiver<Vec<Contact>> {
        self.repo.all_contacts()
    }

    /// Build a transient contact and insert it in the background.
    pub fn add_contact(
        &mut self,
        image: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) {
        let contact = Contact::new(image, phone_number, email, name);
        let repo = Arc::clone(&self.repo);
        self.tasks.spawn_blocking(move || {
            let result = repo.insert(&contact).map(|_| ());
            if let Err(err) = &result {
                error!("insert failed: {err}");
            }
            result
        });
    }

    pub fn update_contact(&mut self, contact: Contact) {
        let repo = Arc::clone(&self.repo);
        self.tasks.spawn_blocking(move || {
            let result = repo.update(&contact);
            if let Err(err) = &result {
                error!("update failed: {err}");
            }
            result
        });
    }

    pub fn delete_contact(&mut self, contact: Contact) {
        let repo = Arc::clone(&self.repo);
        self.tasks.spawn_blocking(move || {
            let result = repo.delete(&contact);
            if let Err(err) = &result {
                error!("delete failed: {err}");
            }
            result
        });
    }

    /// Wait for every dispatched intent to finish and surface the first
    /// storage fault. A one-shot caller (the CLI) uses this as its join
    /// point before rendering; a long-lived UI ignores it and watches the
    /// feed instead.
    pub async fn settle(&mut self) -> Result<()> {
        let mut first_err = None;
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    first_err.get_or_insert(err);
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    first_err.get_or_insert(RoloError::Store(format!("intent task failed: {err}")));
                }
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn new_vm() -> ContactViewModel<InMemoryStore> {
        let repo = ContactRepository::new(InMemoryStore::new()).unwrap();
        ContactViewModel::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn added_contact_appears_exactly_once_with_fresh_id() {
        let mut vm = new_vm();
        vm.add_contact("", "123", "a@x.com", "Ann");
        vm.settle().await.unwrap();

        let contacts = vm.all_contacts().borrow().clone();
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].id > 0);
        assert_eq!(contacts[0].name, "Ann");

        vm.add_contact("", "456", "b@x.com", "Bob");
        vm.settle().await.unwrap();

        let contacts = vm.all_contacts().borrow().clone();
        assert_eq!(contacts.len(), 2);
        assert_ne!(contacts[0].id, contacts[1].id);
    }

    #[tokio::test]
    async fn feed_pushes_without_polling() {
        let mut vm = new_vm();
        let mut rx = vm.all_contacts();

        vm.add_contact("", "123", "a@x.com", "Ann");
        vm.settle().await.unwrap();

        // changed() resolves because the repository already published.
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let mut vm = new_vm();
        vm.add_contact("", "123", "a@x.com", "Ann");
        vm.settle().await.unwrap();

        let mut ann = vm.all_contacts().borrow()[0].clone();
        ann.phone_number = "999".to_string();
        vm.update_contact(ann.clone());
        vm.settle().await.unwrap();

        let contacts = vm.all_contacts().borrow().clone();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].phone_number, "999");

        vm.delete_contact(ann);
        vm.settle().await.unwrap();
        assert!(vm.all_contacts().borrow().is_empty());
    }

    #[tokio::test]
    async fn deleting_twice_is_idempotent() {
        let mut vm = new_vm();
        vm.add_contact("", "123", "a@x.com", "Ann");
        vm.settle().await.unwrap();

        let ann = vm.all_contacts().borrow()[0].clone();
        vm.delete_contact(ann.clone());
        vm.delete_contact(ann);
        vm.settle().await.unwrap();

        assert!(vm.all_contacts().borrow().is_empty());
    }
}
