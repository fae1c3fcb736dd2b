//! Error types for the Agora client.

use agora_types::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the gateway.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request never produced a response (DNS, connection refused, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Gateway answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// Token rejected and could not be refreshed; the session was cleared.
    #[error("Your session has expired. Please sign in again")]
    Unauthorized,

    /// Input rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authenticated call attempted without a stored token.
    #[error("You need to sign in first")]
    MissingSession,

    /// Request aborted because its owner went away.
    #[error("Request cancelled")]
    Cancelled,

    /// Session storage failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ClientError {
    /// Whether the UI should send the visitor to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::MissingSession)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<futures::future::Aborted> for ClientError {
    fn from(_: futures::future::Aborted) -> Self {
        Self::Cancelled
    }
}

/// Errors raised by a [`crate::SessionStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors surfaced by [`crate::AuthService`]; every variant has a message fit
/// for an inline alert.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but the developer profile could not be created.
    #[error("Account created, but the developer profile failed: {0}")]
    DeveloperProfile(#[source] ClientError),

    #[error(transparent)]
    Client(#[from] ClientError),
}
