use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One stored user. `login` never changes after the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub login: String,
    pub password: Option<String>,
    /// Last create or update, local time.
    #[serde(rename = "timestamp", with = "local_timestamp")]
    pub updated_at: DateTime<Local>,
}

impl CredentialRecord {
    pub fn new(login: impl Into<String>, password: Option<String>) -> Self {
        Self {
            login: login.into(),
            password,
            updated_at: Local::now(),
        }
    }

    pub(crate) fn set_password(&mut self, password: Option<String>) {
        self.password = password;
        self.updated_at = Local::now();
    }

    /// Exact, case-sensitive comparison against the stored password.
    pub fn password_matches(&self, candidate: Option<&str>) -> bool {
        self.password.as_deref() == candidate
    }

    pub fn formatted_timestamp(&self) -> String {
        self.updated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

mod local_timestamp {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Local>, D::Error> {
        let raw = String::deserialize(d)?;
        let naive = NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(D::Error::custom)?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| D::Error::custom(format!("timestamp {} does not exist locally", raw)))
    }
}
