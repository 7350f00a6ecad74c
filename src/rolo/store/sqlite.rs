use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;

use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;

// AUTOINCREMENT so a deleted contact's id is never handed out again.
const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;
CREATE TABLE IF NOT EXISTS contacts (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    email        TEXT NOT NULL,
    image        TEXT NOT NULL DEFAULT ''
);
"#;

/// SQLite-backed contact storage.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database at `path`, creating the file and its parent
    /// directory on first use.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::from_conn(Connection::open(path)?)
    }

    /// Private in-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl ContactStore for SqliteStore {
    fn insert(&mut self, contact: &Contact) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO contacts (name, phone_number, email, image) VALUES (?1, ?2, ?3, ?4)",
            params![
                contact.name,
                contact.phone_number,
                contact.email,
                contact.image
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list(&self) -> Result<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone_number, email, image FROM contacts ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Contact {
                id: row.get(0)?,
                name: row.get(1)?,
                phone_number: row.get(2)?,
                email: row.get(3)?,
                image: row.get(4)?,
            })
        })?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }
        Ok(contacts)
    }

    fn update(&mut self, contact: &Contact) -> Result<()> {
        // Zero affected rows (unknown id) is accepted, not an error.
        self.conn.execute(
            "UPDATE contacts SET name = ?1, phone_number = ?2, email = ?3, image = ?4 WHERE id = ?5",
            params![
                contact.name,
                contact.phone_number,
                contact.email,
                contact.image,
                contact.id
            ],
        )?;
        Ok(())
    }

    fn delete(&mut self, contact: &Contact) -> Result<()> {
        self.conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![contact.id])?;
        Ok(())
    }
}
