//! In-memory domain list cache
//!
//! Holds the latest full snapshot of the remote domain list behind a tokio
//! Mutex. The sync task is the only writer; readers take a copy, so a value
//! handed out is never mutated by a later sync. A failed sync leaves the
//! previous snapshot in place — the cache is never cleared on error.

use tokio::sync::Mutex;

/// Thread-safe holder for the domain list snapshot.
///
/// The Mutex is held only long enough to clone or swap the vector; the HTTP
/// fetch and JSON decode happen before [`replace`](DomainCache::replace) is
/// called, so readers never wait on network I/O.
#[derive(Default)]
pub struct DomainCache {
    entries: Mutex<Vec<String>>,
}

impl DomainCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new snapshot wholesale. Never merged or diffed.
    pub async fn replace(&self, domains: Vec<String>) {
        let mut entries = self.entries.lock().await;
        *entries = domains;
    }

    /// Copy out the current snapshot. Empty before the first successful sync.
    pub async fn read(&self) -> Vec<String> {
        let entries = self.entries.lock().await;
        entries.clone()
    }

    /// Number of domains in the current snapshot.
    pub async fn len(&self) -> usize {
        let entries = self.entries.lock().await;
        entries.len()
    }

    /// Whether the cache holds no snapshot yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let cache = DomainCache::new();
        assert!(cache.is_empty().await);
        assert_eq!(cache.read().await, Vec::<String>::new());
    }

    #[tokio::test]
    async fn replace_swaps_wholesale() {
        let cache = DomainCache::new();
        cache.replace(vec!["a.com".into(), "b.com".into()]).await;
        assert_eq!(cache.read().await, vec!["a.com", "b.com"]);

        cache.replace(vec!["c.com".into()]).await;
        assert_eq!(cache.read().await, vec!["c.com"]);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn read_returns_an_independent_copy() {
        let cache = DomainCache::new();
        cache.replace(vec!["a.com".into()]).await;

        let mut copy = cache.read().await;
        copy.push("injected.com".into());

        assert_eq!(cache.read().await, vec!["a.com"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_reads_see_whole_snapshots() {
        let cache = Arc::new(DomainCache::new());
        let old = vec![String::from("old-1.com"), String::from("old-2.com")];
        let new = vec![String::from("new-1.com"), String::from("new-2.com")];
        cache.replace(old.clone()).await;

        let mut readers = vec![];
        for _ in 0..16 {
            let cache = cache.clone();
            let old = old.clone();
            let new = new.clone();
            readers.push(tokio::spawn(async move {
                for _ in 0..100 {
                    let snapshot = cache.read().await;
                    assert!(
                        snapshot == old || snapshot == new,
                        "observed a torn snapshot: {snapshot:?}"
                    );
                }
            }));
        }

        let writer = {
            let cache = cache.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    let next = if i % 2 == 0 { new.clone() } else { old.clone() };
                    cache.replace(next).await;
                }
            })
        };

        for r in readers {
            r.await.unwrap();
        }
        writer.await.unwrap();
    }
}
