use serde::{Deserialize, Serialize};

use crate::error::{Result, RoloError};

/// Id carried by a contact that has not been persisted yet. The store
/// assigns the real id on insert.
pub const TRANSIENT_ID: i64 = 0;

/// A single address-book record.
///
/// `image` is either empty (no photo) or the path of an image file the
/// application copied into its own data directory. The record stores only
/// the reference, never the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub image: String,
}

impl Contact {
    /// Build a transient contact for insertion.
    pub fn new(
        image: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: TRANSIENT_ID,
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            image: image.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }

    /// The add flow requires name, phone and email.
    pub fn validate_for_add(&self) -> Result<()> {
        if self.name.trim().is_empty()
            || self.phone_number.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err(RoloError::Validation("Please fill all fields".to_string()));
        }
        Ok(())
    }

    /// The edit flow only insists on a name.
    pub fn validate_for_update(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RoloError::Validation("Name cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_is_transient() {
        let contact = Contact::new("", "123", "a@x.com", "Ann");
        assert!(contact.is_transient());
        assert_eq!(contact.id, TRANSIENT_ID);
    }

    #[test]
    fn add_requires_all_fields() {
        let contact = Contact::new("", "", "a@x.com", "Ann");
        assert!(contact.validate_for_add().is_err());

        let contact = Contact::new("", "123", "a@x.com", "Ann");
        assert!(contact.validate_for_add().is_ok());
    }

    #[test]
    fn update_only_requires_name() {
        let mut contact = Contact::new("", "", "", "Ann");
        assert!(contact.validate_for_update().is_ok());

        contact.name = "   ".to_string();
        assert!(contact.validate_for_update().is_err());
    }
}
