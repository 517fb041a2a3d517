//! Error types for client operations

/// Errors from client operations.
///
/// Scheduled background ticks log these at the loop boundary and keep going;
/// synchronous caller-invoked operations (startup seed, manual sync, domain
/// management) return them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decoding response body: {0}")]
    Decode(String),

    #[error("this operation requires authentication")]
    RequiresAuth,

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error(transparent)]
    Auth(#[from] fishfish_auth::Error),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
