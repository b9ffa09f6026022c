use thiserror::Error;

/// Coarse classification the transport maps onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound,
    Conflict,
    Unauthorized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Login {0} nao existe")]
    UnknownLogin(String),
    #[error("Password do login {0} invalido")]
    PasswordMismatch(String),
}

/// Every failure a directory operation can report. `Display` is the message
/// shown to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Login {0} nao encontrado")]
    NotFound(String),
    #[error("Login {0} ja existe")]
    Conflict(String),
    #[error(transparent)]
    Unauthorized(#[from] AuthFailure),
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            DirectoryError::NotFound(_) => ErrorKind::NotFound,
            DirectoryError::Conflict(_) => ErrorKind::Conflict,
            DirectoryError::Unauthorized(_) => ErrorKind::Unauthorized,
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
