//! In-memory session token store
//!
//! Holds the current session token behind a tokio Mutex. The background
//! renewal task is the only writer after startup; the request builder and
//! any caller checking for authenticated mode read a copy. The empty string
//! is the unauthenticated state — there is no "absent" token, and no expiry
//! tracking (renewal is unconditional on a timer).

use tokio::sync::Mutex;

/// Thread-safe holder for the current session token.
///
/// The Mutex is held only long enough to clone or replace the string, so
/// readers never block on a renewal in flight (the HTTP call happens before
/// the lock is taken).
#[derive(Default)]
pub struct TokenStore {
    current: Mutex<String>,
}

impl TokenStore {
    /// Create an empty (unauthenticated) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token.
    pub async fn set(&self, token: String) {
        let mut current = self.current.lock().await;
        *current = token;
    }

    /// Get a copy of the current token. Empty means unauthenticated.
    pub async fn get(&self) -> String {
        let current = self.current.lock().await;
        current.clone()
    }

    /// Whether a session token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        !self.get().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store = TokenStore::new();
        assert_eq!(store.get().await, "");
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn set_replaces_wholesale() {
        let store = TokenStore::new();
        store.set("st_1".into()).await;
        assert_eq!(store.get().await, "st_1");
        assert!(store.is_authenticated().await);

        store.set("st_2".into()).await;
        assert_eq!(store.get().await, "st_2");
    }

    #[tokio::test]
    async fn get_returns_a_copy() {
        let store = TokenStore::new();
        store.set("st_1".into()).await;

        let mut copy = store.get().await;
        copy.push_str("-mutated");
        assert_eq!(store.get().await, "st_1");
    }

    #[tokio::test]
    async fn concurrent_writers_do_not_interleave() {
        use std::sync::Arc;

        let store = Arc::new(TokenStore::new());
        let mut handles = vec![];
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.set(format!("st_{i}")).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        // Whichever write landed last, the value is one complete token
        let token = store.get().await;
        assert!(token.starts_with("st_"));
    }
}
