use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Persisted session data failed to parse. Recovered locally by `restore`.
    #[error("Persisted session is malformed: {0}")]
    MalformedSessionError(String),
    #[error("Session storage is unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Failed to write session storage: {0}")]
    StorageWriteFailed(String),
}
