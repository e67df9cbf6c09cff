//! The in-memory store backing the application.
//!
//! `ModelManager` is a cheap handle that can be cloned around; every clone shares the same data.
//! All writes that need a uniqueness check run the check and the insert under a single write lock.

mod user;
mod waitlist;

pub use user::{NewUser, UserAccount};
pub use waitlist::WaitlistEntry;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

#[derive(Clone, Debug, Default)]
pub struct ModelManager {
    store: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    waitlist: waitlist::WaitlistTable,
    users: user::UserTable,
}

impl ModelManager {
    pub fn new() -> Self {
        info!("{:<20} - Initializing the in-memory store", "model manager");
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>> {
        self.store.read().map_err(|_| Error::StorePoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>> {
        self.store.write().map_err(|_| Error::StorePoisoned)
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("email already registered for the waitlist")]
    EmailAlreadyRegistered,
    #[error("username already taken: {username}")]
    UsernameTaken { username: String },

    #[error("store lock poisoned by a panicking writer")]
    StorePoisoned,
}
