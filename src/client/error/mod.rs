//! Error types for the MentorLink client.
//!
//! Every failure the client core can produce is normalized into [`Error`]. Request
//! failures are split into three kinds so callers can tell a server rejection
//! (`ApiError`) from a missed deadline (`TimeoutError`) and from an exchange that never
//! completed at all (`TransportError`). Session persistence and configuration problems
//! have their own enums in the submodules and convert into [`Error`] via `#[from]`.

pub mod config;
pub mod session;

use thiserror::Error;

use crate::client::error::{config::ConfigError, session::SessionError};

/// Main error type for the MentorLink client.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server supplied message when the error body carried one,
    /// otherwise a generic "status + reason" string.
    #[error("{message}")]
    ApiError { status: u16, message: String },
    /// No response arrived within the configured timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    TimeoutError { timeout_ms: u64 },
    /// The exchange could not be completed (network, DNS, body read, decoding).
    #[error("Request could not be completed: {0}")]
    TransportError(String),
    /// Persisted session could not be read or written.
    #[error(transparent)]
    SessionError(#[from] SessionError),
    /// Missing or invalid client configuration.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl Error {
    /// HTTP status of an `ApiError`, `None` for every other kind
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
