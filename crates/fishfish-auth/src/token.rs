//! Session token issuance
//!
//! A single token endpoint interaction: POST the long-lived API key and the
//! requested permission set to `users/@me/tokens`, get back a short-lived
//! session token. Called once synchronously at client startup and then
//! repeated by the background renewal task.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::key::ApiKey;

/// Relative path of the token-issuing endpoint, joined onto the API base URL.
pub const TOKEN_PATH: &str = "users/@me/tokens";

/// Body for the token-issuing endpoint. The API expects the capitalized key.
#[derive(Debug, Serialize)]
struct CreateTokenRequest<'a> {
    #[serde(rename = "Permissions")]
    permissions: &'a [String],
}

/// Response from the token endpoint.
///
/// `expires` is a unix timestamp in seconds. The client does not act on it —
/// renewal is unconditional on a timer — but it is logged for operators.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub token: String,
    /// Expiration as unix timestamp in seconds
    pub expires: u64,
}

/// Request a new session token from the token endpoint.
///
/// `token_url` is the full endpoint URL (base URL + [`TOKEN_PATH`]); the
/// long-lived key goes in the `Authorization` header. Non-2xx responses and
/// malformed bodies are returned as errors; the caller decides whether that
/// is fatal (startup seed) or merely logged (scheduled renewal).
pub async fn create_session_token(
    client: &reqwest::Client,
    token_url: &str,
    key: &ApiKey,
    permissions: &[String],
) -> Result<TokenResponse> {
    let response = client
        .post(token_url)
        .header("Authorization", key.expose())
        .json(&CreateTokenRequest { permissions })
        .send()
        .await
        .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    let token = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))?;

    debug!(expires = token.expires, "session token issued");
    Ok(token)
}
