//! FishFish session authentication library
//!
//! Handles the credential side of the FishFish API: exchanging a long-lived
//! API key for a short-lived session token, and holding the current session
//! token for the rest of the client to read. This crate is a standalone
//! library with no dependency on the client crate — it can be tested and
//! used independently.
//!
//! Credential flow:
//! 1. Caller wraps its API key in [`ApiKey`] (redacted in logs)
//! 2. Client calls [`create_session_token`] against `users/@me/tokens`
//! 3. The returned token is stored via [`TokenStore::set`]
//! 4. Request paths read the current token via [`TokenStore::get`]
//! 5. A background task repeats steps 2–3 on a fixed cadence

pub mod error;
pub mod key;
pub mod store;
pub mod token;

pub use error::{Error, Result};
pub use key::ApiKey;
pub use store::TokenStore;
pub use token::{TokenResponse, create_session_token};
