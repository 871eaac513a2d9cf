//! User text prompt abstraction
//!
//! The create-new flow asks the user for text through a [`PromptSource`] so
//! the interactive dialog can be swapped for a double in tests. Returning
//! `None` means the user dismissed the prompt.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Ask the user for a line of text; may return nothing
pub trait PromptSource: Send + Sync {
    fn ask(&self, message: &str) -> Option<String>;
}

/// Prompt double replaying a queue of canned answers.
///
/// An exhausted queue answers `None`, as if the user kept cancelling.
#[derive(Debug, Default)]
pub struct CannedPrompt {
    answers: Mutex<VecDeque<Option<String>>>,
    messages: Mutex<Vec<String>>,
}

impl CannedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a submitted answer
    pub fn answer(self, text: impl Into<String>) -> Self {
        self.answers.lock().unwrap().push_back(Some(text.into()));
        self
    }

    /// Queue a cancellation
    pub fn cancel(self) -> Self {
        self.answers.lock().unwrap().push_back(None);
        self
    }

    /// Messages the prompt was shown with, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl PromptSource for CannedPrompt {
    fn ask(&self, message: &str) -> Option<String> {
        self.messages.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front().flatten()
    }
}
