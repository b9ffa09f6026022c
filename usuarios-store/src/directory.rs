use std::collections::HashMap;

use parking_lot::RwLock;

use crate::{
    error::{AuthFailure, DirectoryError, DirectoryResult},
    record::CredentialRecord,
    request::{LoginAttempt, NewUser, PasswordChange},
};

const SEED_LOGINS: [&str; 3] = ["maria", "ana", "joao"];
const SEED_PASSWORD: &str = "123";

/// The set of known users, keyed by login.
///
/// Mutations hold the write lock across their whole check-then-act sequence,
/// so two concurrent creates of the same login cannot both succeed. Reads
/// share the read lock and never see a half-applied change.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<HashMap<String, CredentialRecord>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the three startup accounts.
    pub fn seeded() -> Self {
        let users = SEED_LOGINS
            .iter()
            .map(|login| {
                let record = CredentialRecord::new(*login, Some(SEED_PASSWORD.to_string()));
                (login.to_string(), record)
            })
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// All records, ascending by login.
    pub fn list(&self) -> Vec<CredentialRecord> {
        let mut records: Vec<CredentialRecord> = self.users.read().values().cloned().collect();
        records.sort_by(|a, b| a.login.cmp(&b.login));
        records
    }

    pub fn get(&self, login: &str) -> DirectoryResult<CredentialRecord> {
        self.users
            .read()
            .get(login)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(login.to_string()))
    }

    pub fn create(&self, new_user: NewUser) -> DirectoryResult<CredentialRecord> {
        let (login, password) = new_user.into_parts();

        let mut users = self.users.write();
        if users.contains_key(&login) {
            return Err(DirectoryError::Conflict(login));
        }
        let record = CredentialRecord::new(login.clone(), password);
        users.insert(login, record.clone());
        log::info!("user {} created", record.login);
        Ok(record)
    }

    pub fn update(&self, login: &str, change: PasswordChange) -> DirectoryResult<CredentialRecord> {
        let mut users = self.users.write();
        let record = users
            .get_mut(login)
            .ok_or_else(|| DirectoryError::NotFound(login.to_string()))?;
        record.set_password(change.password);
        log::info!("user {} updated", login);
        Ok(record.clone())
    }

    pub fn delete(&self, login: &str) -> DirectoryResult<CredentialRecord> {
        let removed = self
            .users
            .write()
            .remove(login)
            .ok_or_else(|| DirectoryError::NotFound(login.to_string()))?;
        log::info!("user {} deleted", login);
        Ok(removed)
    }

    /// Checks the supplied password against the stored one. Stateless: nothing
    /// is recorded and no token is issued.
    pub fn authenticate(&self, attempt: &LoginAttempt) -> DirectoryResult<()> {
        let users = self.users.read();
        let record = users
            .get(&attempt.login)
            .ok_or_else(|| AuthFailure::UnknownLogin(attempt.login.clone()))?;
        if !record.password_matches(attempt.password.as_deref()) {
            return Err(AuthFailure::PasswordMismatch(attempt.login.clone()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;
