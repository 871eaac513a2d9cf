//! Select augmentation configuration
//!
//! A control is augmented with a resolved [`SelectConfig`]: fixed defaults with
//! caller overrides merged on top, resolved once at augmentation time. There is
//! no process-wide defaults object; callers pass overrides explicitly.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Default key under which the submitted text is POSTed.
pub const DEFAULT_FIELD_NAME: &str = "name";
/// Default display text for the sentinel option.
pub const DEFAULT_SENTINEL_TEXT: &str = "-- Create New --";
/// Default message shown by the text prompt.
pub const DEFAULT_PROMPT_MESSAGE: &str = "Please Enter Name";

/// Resolved configuration for one augmented control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Name of the single form field sent to the server
    pub field_name: String,
    /// Display text of the inserted sentinel option
    pub sentinel_text: String,
    /// Message shown in the text prompt
    pub prompt_message: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            field_name: DEFAULT_FIELD_NAME.to_string(),
            sentinel_text: DEFAULT_SENTINEL_TEXT.to_string(),
            prompt_message: DEFAULT_PROMPT_MESSAGE.to_string(),
        }
    }
}

/// Caller-supplied overrides; missing keys keep the defaults.
///
/// Unrecognized keys in a deserialized document are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectConfigOverrides {
    pub field_name: Option<String>,
    pub sentinel_text: Option<String>,
    pub prompt_message: Option<String>,
}

impl SelectConfig {
    /// Merge overrides onto the defaults
    pub fn resolve(overrides: SelectConfigOverrides) -> Self {
        let mut config = Self::default();
        if let Some(field_name) = overrides.field_name {
            config.field_name = field_name;
        }
        if let Some(sentinel_text) = overrides.sentinel_text {
            config.sentinel_text = sentinel_text;
        }
        if let Some(prompt_message) = overrides.prompt_message {
            config.prompt_message = prompt_message;
        }
        config
    }

    /// Load configuration from a TOML file, merging onto defaults.
    ///
    /// A missing or unreadable file yields the defaults; a file that exists but
    /// fails to parse is an error so typos do not silently vanish.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let overrides: SelectConfigOverrides = toml::from_str(&contents)?;
        Ok(Self::resolve(overrides))
    }
}
