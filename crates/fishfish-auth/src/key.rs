//! Redacting wrapper for the long-lived API key
//!
//! The API key is the only long-lived secret in the system; session tokens
//! are short-lived and renewed on a timer. Wrapping the key keeps it out of
//! `Debug` output and log lines, and zeroes the backing memory on drop.

use std::fmt;
use zeroize::Zeroize;

/// Long-lived FishFish API key - redacted in Debug/Display/logs.
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the raw key for the `Authorization` header (use sparingly).
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let key = ApiKey::new("ff-super-secret");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "[REDACTED]");
        assert!(!debug.contains("ff-super-secret"));
    }

    #[test]
    fn expose_returns_raw_value() {
        let key = ApiKey::new("ff-super-secret");
        assert_eq!(key.expose(), "ff-super-secret");
    }
}
