//! Events delivered to the app loop from spawned tasks

use crate::remote::{CreateError, CreatedEntry};

/// Application event
#[derive(Debug)]
pub enum AppEvent {
    /// The create endpoint answered
    CreateCompleted(Result<CreatedEntry, CreateError>),
}
