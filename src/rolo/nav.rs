//! Navigation surface: a tagged union of destinations routed through an
//! explicit state machine, instead of string-keyed routes.

use crate::model::Contact;

/// A logical screen the UI can sit on. Detail and Edit carry the id of the
/// contact they operate on; the id has to resolve against the current feed
/// snapshot at navigation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    List,
    Add,
    Detail(i64),
    Edit(i64),
}

impl Destination {
    /// The contact id this destination requires, if any.
    pub fn target(&self) -> Option<i64> {
        match self {
            Destination::Detail(id) | Destination::Edit(id) => Some(*id),
            Destination::List | Destination::Add => None,
        }
    }
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Arrived(Destination),
    /// The requested contact no longer exists; the router fell back to the
    /// list.
    NotFound { id: i64 },
}

/// Navigation state machine over [`Destination`]s.
#[derive(Debug)]
pub struct Router {
    current: Destination,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Destination::List,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    /// Move to `dest`. A Detail/Edit target that does not resolve against
    /// `contacts` redirects to the list instead; no record is mutated
    /// either way.
    pub fn navigate(&mut self, dest: Destination, contacts: &[Contact]) -> Navigation {
        if let Some(id) = dest.target() {
            if !contacts.iter().any(|c| c.id == id) {
                self.current = Destination::List;
                return Navigation::NotFound { id };
            }
        }
        self.current = dest;
        Navigation::Arrived(dest)
    }
}
