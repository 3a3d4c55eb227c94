use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::Contact;
use crate::errors::AppError;

pub const DEFAULT_DB_PATH: &str = "db/contacts.json";

/// File-backed contact collection. The file is the sole source of truth:
/// every operation re-reads it from disk, and mutations rewrite it in full.
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole database file and parses it as a JSON array of contacts.
    /// A missing or unreadable file is an `Io` error, malformed content a
    /// `Json` error.
    pub fn read_all(&self) -> Result<Vec<Contact>, AppError> {
        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    /// Linear scan for the first contact whose id matches. Absence is not an
    /// error.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let contacts = self.read_all()?;

        Ok(contacts.into_iter().find(|contact| contact.id == id))
    }

    /// Drops every contact whose id matches and rewrites the file. The file
    /// is rewritten even when nothing matched; last writer wins. Returns the
    /// first removed contact, if any.
    pub fn remove(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let contacts = self.read_all()?;

        let mut kept = Vec::with_capacity(contacts.len());
        let mut removed = None;

        for contact in contacts {
            if contact.id == id {
                removed.get_or_insert(contact);
            } else {
                kept.push(contact);
            }
        }

        self.save(&kept)?;
        Ok(removed)
    }

    /// Creates a contact with a fresh id and prepends it, newest first.
    /// Rejects the insert without writing when another contact already uses
    /// the same email (case-sensitive exact match).
    pub fn add(&self, name: String, email: String, phone: String) -> Result<Contact, AppError> {
        let contacts = self.read_all()?;

        let new_contact = Contact::new(name, email, phone);

        if contacts
            .iter()
            .any(|contact| contact.email == new_contact.email)
        {
            return Err(AppError::DuplicateEmail(new_contact.email));
        }

        let mut updated = Vec::with_capacity(contacts.len() + 1);
        updated.push(new_contact.clone());
        updated.extend(contacts);

        self.save(&updated)?;
        Ok(new_contact)
    }

    // The original file format uses tab indentation, so plain
    // serde_json::to_string_pretty (two spaces) would not round-trip it.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        contacts.serialize(&mut ser)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&buf)?;
        Ok(())
    }
}
