//! Terminal select control with an inline create-new flow.
//!
//! Augmenting a [`SelectControl`] inserts a sentinel "create new" option as
//! its second entry. When the user selects the sentinel, the flow prompts for
//! text, POSTs it to the control's endpoint as a single form field, and
//! inserts the server's `{value, name}` answer as a newly selected option
//! right after the sentinel. Cancelling or submitting nothing reverts the
//! selection to the first option.
//!
//! Sentinel detection compares the selected option's display text with the
//! configured sentinel text. If a created option carries identical text it
//! will trigger the flow too; pick a sentinel text your data cannot produce.
//! Augmenting the same control twice inserts two sentinels.

pub mod config;
pub mod flow;
pub mod prompt;
pub mod remote;
pub mod select;
pub mod ui;
pub mod util;

pub use config::{SelectConfig, SelectConfigOverrides};
pub use flow::{run_create_flow, CreateFlow, FlowEffect, FlowState};
pub use prompt::{CannedPrompt, PromptSource};
pub use remote::{
    CreateClient, CreateError, CreatedEntry, HttpCreateClient, MockCreateClient, RecordedCreate,
};
pub use select::{augment, is_sentinel_selected, OptionTag, SelectControl, SelectError, SelectOption};
pub use ui::App;
