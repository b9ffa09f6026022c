//! Validation of request bodies before they reach [`UserDirectory`].
//!
//! Bodies decode into [`UserPayload`]; each operation then turns it into its
//! own typed input and reports `InvalidRequest` when `login` is missing.
//!
//! [`UserDirectory`]: crate::UserDirectory

use serde::Deserialize;

use crate::error::{DirectoryError, DirectoryResult};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A create request whose login is known to be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    login: String,
    password: Option<String>,
}

impl NewUser {
    pub fn new(login: impl Into<String>, password: Option<String>) -> DirectoryResult<Self> {
        Ok(Self {
            login: required_login(Some(login.into()))?,
            password,
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>) {
        (self.login, self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub login: String,
    pub password: Option<String>,
}

impl UserPayload {
    pub fn into_new_user(self) -> DirectoryResult<NewUser> {
        NewUser::new(self.login.unwrap_or_default(), self.password)
    }

    pub fn into_password_change(self) -> PasswordChange {
        PasswordChange {
            password: self.password,
        }
    }

    pub fn into_login_attempt(self) -> DirectoryResult<LoginAttempt> {
        Ok(LoginAttempt {
            login: required_login(self.login)?,
            password: self.password,
        })
    }
}

fn required_login(login: Option<String>) -> DirectoryResult<String> {
    match login {
        Some(login) if !login.is_empty() => Ok(login),
        _ => Err(DirectoryError::InvalidRequest(
            "Missing required parameter: login".to_string(),
        )),
    }
}
