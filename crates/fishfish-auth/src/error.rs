//! Error types for session token operations

/// Errors from session token operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("token endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid token response: {0}")]
    Decode(String),
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
