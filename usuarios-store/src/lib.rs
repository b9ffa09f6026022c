//! In-memory user directory: credential records keyed by login, with the
//! create/read/update/delete and authentication rules the HTTP layer exposes.

pub mod directory;
pub mod error;
pub mod record;
pub mod request;

pub use directory::UserDirectory;
pub use error::{AuthFailure, DirectoryError, ErrorKind};
pub use record::CredentialRecord;
