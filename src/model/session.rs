use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// Access level carried by a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
    University,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Mentor, Role::University];

    /// Wire name of the role, as sent to and received from the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Mentor => "mentor",
            Self::University => "university",
        }
    }

    /// Human readable name used in page titles and form options
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Mentor => "Mentor",
            Self::University => "University",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("Unknown role: {:?}", value))
    }
}

/// The authenticated identity held by the client.
///
/// Serialized as-is into persistent storage, so the field names double as the
/// storage layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub email: String,
    pub role: Role,
}

/// Accept user IDs sent either as JSON strings or numbers.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    }))
}
