//! Domain record management
//!
//! Thin authenticated translation of add/update/delete into one outgoing
//! request each. These operations hold no state of their own: they read the
//! current session token, require it to be present, and propagate transport
//! errors unchanged. Response bodies are not interpreted — the API signals
//! rejection of a bad token server-side.

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::Client;
use crate::error::{Error, Result};

/// Classification of a listed domain.
///
/// The wire format is the lowercase name. String input is validated at the
/// [`FromStr`] boundary so a typed value is always a valid category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Safe,
    Malware,
    Phishing,
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "safe" => Ok(Category::Safe),
            "malware" => Ok(Category::Malware),
            "phishing" => Ok(Category::Phishing),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Safe => "safe",
            Category::Malware => "malware",
            Category::Phishing => "phishing",
        };
        f.write_str(name)
    }
}

/// Body for creating a domain record.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDomain {
    pub category: Category,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Body for updating a domain record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDomain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Client {
    /// Create a domain record. Requires a session token.
    ///
    /// On success the domain cache is re-synced immediately so the new record
    /// is visible without waiting for the next scheduled tick; a failed
    /// re-sync is logged and left to the scheduler.
    pub async fn add_domain(&self, domain: &str, body: &CreateDomain) -> Result<()> {
        let inner = self.inner();
        inner.require_session().await?;

        inner
            .request(Method::POST, &format!("domains/{domain}"))
            .await
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("add domain request failed: {e}")))?;

        if let Err(e) = inner.sync_domains().await {
            warn!(domain, error = %e, "post-add sync failed, cache refreshes on the next tick");
        }
        Ok(())
    }

    /// Update fields of an existing domain record. Requires a session token.
    pub async fn update_domain(&self, domain: &str, body: &UpdateDomain) -> Result<()> {
        let inner = self.inner();
        inner.require_session().await?;

        inner
            .request(Method::PATCH, &format!("domains/{domain}"))
            .await
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("update domain request failed: {e}")))?;
        Ok(())
    }

    /// Delete a domain record. Requires a session token.
    pub async fn delete_domain(&self, domain: &str) -> Result<()> {
        let inner = self.inner();
        inner.require_session().await?;

        inner
            .request(Method::DELETE, &format!("domains/{domain}"))
            .await
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| Error::Http(format!("delete domain request failed: {e}")))?;
        Ok(())
    }
}
