mod dialog;
mod prompt_dialog;
mod select_view;
mod text_input;

pub use dialog::{DialogFrame, InstructionBar};
pub use prompt_dialog::{PromptDialog, PromptDialogState, PromptOutcome};
pub use select_view::SelectView;
pub use text_input::TextInputState;
