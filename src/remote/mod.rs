//! Create-endpoint wire protocol
//!
//! Outbound: `POST <endpoint>` with a single form field, the configured field
//! name carrying the user's text. Inbound on success: a JSON body with at
//! least `value` and `name`; extra fields are ignored and `value` may arrive
//! as a string or a number.

pub mod client;
pub mod mock;

pub use client::HttpCreateClient;
pub use mock::{MockCreateClient, RecordedCreate};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Entry returned by the create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedEntry {
    /// Identifier for the new option
    #[serde(deserialize_with = "value_as_string")]
    pub value: String,
    /// Display text for the new option
    pub name: String,
}

/// Accept `"42"` and `42` alike; servers differ on identifier typing.
fn value_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for `value`, got {other}"
        ))),
    }
}

/// Error talking to the create endpoint
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Something that can create a new entry on the server
#[async_trait]
pub trait CreateClient: Send + Sync {
    /// POST `{field_name: value}` to `endpoint` and parse the created entry
    async fn create(
        &self,
        endpoint: &str,
        field_name: &str,
        value: &str,
    ) -> Result<CreatedEntry, CreateError>;
}
