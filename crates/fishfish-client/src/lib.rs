//! FishFish registry client
//!
//! A cache-and-refresh client for the FishFish scam-domain registry API.
//! The client keeps a locally readable snapshot of the remote domain list
//! fresh without blocking callers, and keeps a session token valid without
//! callers managing its lifecycle.
//!
//! Usage:
//! 1. Build a [`Config`] (anonymous by default; set `api_key` for writes)
//! 2. [`Client::start`] seeds the token and domain cache, then launches the
//!    background refresh tasks
//! 3. Read [`Client::domains`] at any time — it returns a copy of the latest
//!    snapshot and never touches the network
//! 4. Mutate records via [`Client::add_domain`] and friends (authenticated)
//! 5. [`Client::stop`] shuts both refresh tasks down; reads keep working

pub mod cache;
pub mod client;
pub mod config;
pub mod domains;
pub mod error;

mod refresh;

pub use client::Client;
pub use config::{API_VERSION, Config, default_base_url};
pub use domains::{Category, CreateDomain, UpdateDomain};
pub use error::{Error, Result};
pub use fishfish_auth::ApiKey;
