//! Client lifecycle and refresh wiring
//!
//! [`Client::start`] owns the whole lifecycle: it seeds the token store and
//! domain cache synchronously, then spawns the two background refresh tasks
//! (domain-list sync always; token renewal only when an API key is
//! configured). Readers call [`Client::domains`] concurrently with the sync
//! task's writes and always get a complete copy of the latest snapshot.
//!
//! Seed failures are logged and non-fatal: the client comes up with an empty
//! cache or without a session token and recovers on the first successful
//! scheduled tick. A scheduled tick failure likewise never tears anything
//! down — the stale value stays visible until the next success.

use std::sync::Arc;

use fishfish_auth::{TokenStore, create_session_token};
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, info, warn};

use crate::cache::DomainCache;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::refresh::{self, RefreshTask};

/// State shared between the client handle and the background tasks.
pub(crate) struct ClientInner {
    pub(crate) config: Config,
    pub(crate) http: reqwest::Client,
    pub(crate) tokens: TokenStore,
    pub(crate) cache: DomainCache,
}

impl ClientInner {
    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Build a request against the API with the current session token.
    ///
    /// The `Authorization` header is set unconditionally: an empty value is
    /// the API's anonymous-read convention for the list endpoint, and the
    /// mutating endpoints reject it server-side.
    pub(crate) async fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let token = self.tokens.get().await;
        self.http
            .request(method, self.api_url(path))
            .header(AUTHORIZATION, token)
    }

    /// Current session token, or an error when none is held.
    ///
    /// Mutating operations call this before building a request so the caller
    /// gets a synchronous precondition error instead of a guaranteed 401.
    pub(crate) async fn require_session(&self) -> Result<String> {
        let token = self.tokens.get().await;
        if token.is_empty() {
            return Err(Error::RequiresAuth);
        }
        Ok(token)
    }

    /// Fetch the full domain list and replace the cache on success.
    ///
    /// On transport failure, non-200 status, or a malformed body the cache is
    /// left untouched and the error is returned to the caller (the scheduled
    /// loop logs it; the startup seed and `sync_now` propagate it).
    pub(crate) async fn sync_domains(&self) -> Result<()> {
        let response = self
            .request(Method::GET, "domains")
            .await
            .send()
            .await
            .map_err(|e| Error::Http(format!("domain list request failed: {e}")))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let domains = response
            .json::<Vec<String>>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;

        debug!(count = domains.len(), "domain list synced");
        self.cache.replace(domains).await;
        Ok(())
    }

    /// Request a fresh session token and replace the stored one on success.
    pub(crate) async fn renew_session_token(&self) -> Result<()> {
        let key = self.config.api_key.as_ref().ok_or(Error::RequiresAuth)?;
        let token_url = self.api_url(fishfish_auth::token::TOKEN_PATH);
        let response =
            create_session_token(&self.http, &token_url, key, &self.config.permissions).await?;

        info!(expires = response.expires, "session token renewed");
        self.tokens.set(response.token).await;
        Ok(())
    }
}

/// Handle to a running FishFish client.
///
/// Construct with [`Client::start`]; shut down with [`Client::stop`].
/// Shutdown is terminal — a stopped client cannot be restarted, but its
/// cache and token remain readable.
pub struct Client {
    inner: Arc<ClientInner>,
    sync_task: RefreshTask,
    token_task: Option<RefreshTask>,
}

impl Client {
    /// Start a client: seed the stores synchronously, then launch the
    /// background refresh tasks.
    ///
    /// When an API key is configured the first token fetch happens before
    /// the first domain sync, so the seed sync (and every authenticated
    /// operation after `start` returns) already carries a session token.
    /// Either seed failing is logged and non-fatal; only invalid
    /// configuration makes `start` return an error.
    pub async fn start(config: Config) -> Result<Client> {
        config.validate()?;
        let sync_interval = config.sync_interval;
        let token_interval = config.token_interval;
        let authenticated = config.api_key.is_some();

        let inner = Arc::new(ClientInner {
            config,
            http: reqwest::Client::new(),
            tokens: TokenStore::new(),
            cache: DomainCache::new(),
        });

        if authenticated {
            if let Err(e) = inner.renew_session_token().await {
                warn!(error = %e, "initial session token fetch failed, starting without a token");
            }
        }

        if let Err(e) = inner.sync_domains().await {
            warn!(error = %e, "initial domain sync failed, cache starts empty");
        }

        let sync_task = {
            let inner = Arc::clone(&inner);
            refresh::spawn("domain-sync", sync_interval, move || {
                let inner = Arc::clone(&inner);
                async move { inner.sync_domains().await }
            })
        };

        let token_task = authenticated.then(|| {
            let inner = Arc::clone(&inner);
            refresh::spawn("token-renewal", token_interval, move || {
                let inner = Arc::clone(&inner);
                async move { inner.renew_session_token().await }
            })
        });

        Ok(Client {
            inner,
            sync_task,
            token_task,
        })
    }

    /// Copy of the current domain list snapshot. Never blocks on I/O.
    pub async fn domains(&self) -> Vec<String> {
        self.inner.cache.read().await
    }

    /// Current session token. Empty means the client is unauthenticated.
    pub async fn session_token(&self) -> String {
        self.inner.tokens.get().await
    }

    /// Run one domain sync immediately, outside the scheduled cadence.
    ///
    /// Unlike a scheduled tick, the error is returned to the caller.
    pub async fn sync_now(&self) -> Result<()> {
        self.inner.sync_domains().await
    }

    /// Signal both refresh tasks to stop and wait for each to exit.
    ///
    /// No tick fires after this returns. The cache and token store are not
    /// torn down: reads keep returning the last committed values. A second
    /// call is a no-op.
    pub async fn stop(&self) {
        self.sync_task.stop().await;
        if let Some(task) = &self.token_task {
            task.stop().await;
        }
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }
}
