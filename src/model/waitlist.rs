use std::collections::{hash_map::Entry, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::{Error, ModelManager, Result};

// ###################################
// ->   STRUCTS
// ###################################
/// A single waitlist signup. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Entries are kept in insertion order, `by_email` indexes into `entries`.
#[derive(Debug, Default)]
pub(super) struct WaitlistTable {
    entries: Vec<WaitlistEntry>,
    by_email: HashMap<String, usize>,
    last_id: u64,
}

// ###################################
// ->   IMPLs
// ###################################
impl WaitlistTable {
    fn insert(&mut self, email: &str) -> Result<WaitlistEntry> {
        let slot = match self.by_email.entry(email.to_owned()) {
            Entry::Occupied(_) => return Err(Error::EmailAlreadyRegistered),
            Entry::Vacant(slot) => slot,
        };

        self.last_id += 1;
        let entry = WaitlistEntry {
            id: self.last_id,
            email: email.to_owned(),
            created_at: Utc::now(),
        };
        slot.insert(self.entries.len());
        self.entries.push(entry.clone());

        Ok(entry)
    }

    fn get(&self, email: &str) -> Option<&WaitlistEntry> {
        self.by_email.get(email).map(|&idx| &self.entries[idx])
    }
}

impl ModelManager {
    /// Stores a new waitlist entry with the next id and the current timestamp.
    /// The email is expected to be validated already and is stored as given.
    /// Fails with `EmailAlreadyRegistered` if the email is already on the waitlist,
    /// the existing entry is left untouched.
    pub fn create_waitlist_entry(&self, email: &str) -> Result<WaitlistEntry> {
        let entry = self.write()?.waitlist.insert(email)?;
        debug!("{:<20} - id: {}", "waitlist entry created", entry.id);
        Ok(entry)
    }

    pub fn find_waitlist_entry_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>> {
        Ok(self.read()?.waitlist.get(email).cloned())
    }

    /// All entries in the order they were created.
    pub fn list_waitlist_entries(&self) -> Result<Vec<WaitlistEntry>> {
        Ok(self.read()?.waitlist.entries.clone())
    }
}
