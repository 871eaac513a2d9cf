//! HTTP implementation of the create client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{CreateClient, CreateError, CreatedEntry};

const CREATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Create client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpCreateClient {
    client: Client,
}

impl HttpCreateClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpCreateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CreateClient for HttpCreateClient {
    async fn create(
        &self,
        endpoint: &str,
        field_name: &str,
        value: &str,
    ) -> Result<CreatedEntry, CreateError> {
        debug!(endpoint, field_name, "submitting create request");

        let response = self
            .client
            .post(endpoint)
            .form(&[(field_name, value)])
            .timeout(CREATE_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, %status, "create request rejected");
            return Err(CreateError::Status(status));
        }

        let body = response.text().await?;
        let entry: CreatedEntry =
            serde_json::from_str(&body).map_err(|e| CreateError::Malformed(e.to_string()))?;

        debug!(value = %entry.value, name = %entry.name, "create request succeeded");
        Ok(entry)
    }
}
