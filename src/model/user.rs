use std::collections::HashMap;

use secrecy::SecretString;

use super::{Error, ModelManager, Result};

// ###################################
// ->   STRUCTS
// ###################################
/// Not reachable over HTTP, only part of the store contract.
/// The password is kept as an opaque secret.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: u64,
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Default)]
pub(super) struct UserTable {
    by_id: HashMap<u64, UserAccount>,
    by_username: HashMap<String, u64>,
    last_id: u64,
}

// ###################################
// ->   IMPLs
// ###################################
impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl UserTable {
    fn insert(&mut self, new_user: NewUser) -> Result<UserAccount> {
        if self.by_username.contains_key(&new_user.username) {
            return Err(Error::UsernameTaken {
                username: new_user.username,
            });
        }

        self.last_id += 1;
        let user = UserAccount {
            id: self.last_id,
            username: new_user.username,
            password: new_user.password,
        };
        self.by_username.insert(user.username.clone(), user.id);
        self.by_id.insert(user.id, user.clone());

        Ok(user)
    }
}

impl ModelManager {
    pub fn create_user(&self, new_user: NewUser) -> Result<UserAccount> {
        self.write()?.users.insert(new_user)
    }

    pub fn find_user_by_id(&self, id: u64) -> Result<Option<UserAccount>> {
        Ok(self.read()?.users.by_id.get(&id).cloned())
    }

    pub fn find_user_by_username(&self, username: &str) -> Result<Option<UserAccount>> {
        let store = self.read()?;
        let user = store
            .users
            .by_username
            .get(username)
            .and_then(|id| store.users.by_id.get(id))
            .cloned();

        Ok(user)
    }
}
