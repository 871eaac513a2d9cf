//! Mock create client for tests
//!
//! Records every request it receives and replays a queue of canned responses,
//! so the flow can be exercised without a server.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CreateClient, CreateError, CreatedEntry};

/// One request as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCreate {
    pub endpoint: String,
    pub field_name: String,
    pub value: String,
}

/// Create client double with canned responses
#[derive(Debug, Default)]
pub struct MockCreateClient {
    responses: Mutex<VecDeque<Result<CreatedEntry, CreateError>>>,
    requests: Mutex<Vec<RecordedCreate>>,
}

impl MockCreateClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn respond_with(self, value: impl Into<String>, name: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(CreatedEntry {
            value: value.into(),
            name: name.into(),
        }));
        self
    }

    /// Queue an error response
    pub fn fail_with(self, error: CreateError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedCreate> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateClient for MockCreateClient {
    async fn create(
        &self,
        endpoint: &str,
        field_name: &str,
        value: &str,
    ) -> Result<CreatedEntry, CreateError> {
        self.requests.lock().unwrap().push(RecordedCreate {
            endpoint: endpoint.to_string(),
            field_name: field_name.to_string(),
            value: value.to_string(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CreateError::Malformed("no response queued".into())))
    }
}
