//! # Storage Layer
//!
//! This module defines the persistence abstraction for rolo. The
//! [`ContactStore`] trait keeps the repository and everything above it from
//! naming a concrete database.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: production backend, one `contacts` table in a
//!   SQLite file under the application data directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, and the proof
//!   that backends can be swapped without touching presentation code.
//!
//! ## Contract
//!
//! - `insert` ignores the incoming id and returns the id the store
//!   assigned. Assigned ids are never reused, so every insert produces an
//!   id distinct from all prior ones.
//! - `update` and `delete` match on `contact.id` and are silent no-ops when
//!   no such row exists.
//! - `list` returns a one-shot snapshot in id order. The live feed over
//!   snapshots belongs to [`crate::repo::ContactRepository`].

use crate::error::Result;
use crate::model::Contact;

pub mod memory;
pub mod sqlite;

/// Abstract interface for contact persistence.
pub trait ContactStore: Send + 'static {
    /// Insert a new record, returning the generated id.
    fn insert(&mut self, contact: &Contact) -> Result<i64>;

    /// Snapshot of all records, in id order.
    fn list(&self) -> Result<Vec<Contact>>;

    /// Replace the record matching `contact.id`; no-op if absent.
    fn update(&mut self, contact: &Contact) -> Result<()>;

    /// Remove the record matching `contact.id`; no-op if absent.
    fn delete(&mut self, contact: &Contact) -> Result<()>;
}
