use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::session::{deserialize_optional_id, Role};

/// The response when an error occurs with an API request
///
/// Servers are inconsistent about the field name and type, so both `error` and
/// `message` are kept as raw JSON and `message()` picks the first usable one.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct ErrorDto {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorDto {
    /// First non-empty string among `error` and `message`, in that order
    pub fn message(&self) -> Option<String> {
        [&self.error, &self.message]
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .find(|message| !message.trim().is_empty())
            .map(str::to_string)
    }
}

/// Credentials submitted to the login endpoint
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Identity returned by the login endpoint
///
/// Every field may be omitted by the server; the session store falls back to the
/// submitted email and role when they are.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct LoginResponseDto {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}
