//! Modal text prompt dialog
//!
//! The TUI rendition of the create-new prompt: while visible it captures all
//! key input, so at most one flow can be entered at a time. Enter submits,
//! Esc cancels; an empty submission counts as a cancel upstream.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use super::dialog::{DialogFrame, InstructionBar};
use super::text_input::TextInputState;

/// What a key did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still open
    Pending,
    /// Closed with the entered text (`None` = cancelled)
    Closed(Option<String>),
}

/// State for the prompt dialog
#[derive(Debug, Clone, Default)]
pub struct PromptDialogState {
    visible: bool,
    message: String,
    input: TextInputState,
}

impl PromptDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog with a fresh input
    pub fn open(&mut self, message: impl Into<String>) {
        self.visible = true;
        self.message = message.into();
        self.input.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle a key while the dialog is open
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Enter => {
                self.visible = false;
                PromptOutcome::Closed(Some(self.input.take()))
            }
            KeyCode::Esc => {
                self.visible = false;
                self.input.clear();
                PromptOutcome::Closed(None)
            }
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                PromptOutcome::Pending
            }
            KeyCode::Backspace => {
                self.input.delete_char();
                PromptOutcome::Pending
            }
            KeyCode::Left => {
                self.input.move_left();
                PromptOutcome::Pending
            }
            KeyCode::Right => {
                self.input.move_right();
                PromptOutcome::Pending
            }
            KeyCode::Home => {
                self.input.move_start();
                PromptOutcome::Pending
            }
            KeyCode::End => {
                self.input.move_end();
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }
}

/// Prompt dialog widget
pub struct PromptDialog;

impl PromptDialog {
    pub fn render(area: Rect, buf: &mut Buffer, state: &PromptDialogState) {
        if !state.visible {
            return;
        }

        let inner = DialogFrame::new(&state.message, 44, 7).render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // input
            Constraint::Length(1), // spacing
            Constraint::Length(1), // instructions
        ])
        .split(inner);

        state
            .input
            .render(chunks[0], buf, Style::default().fg(Color::White));

        // Spacer row stays blank
        Paragraph::new("").render(chunks[1], buf);

        InstructionBar::new(&[("Enter", "submit"), ("Esc", "cancel")]).render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_then_enter_closes_with_text() {
        let mut state = PromptDialogState::new();
        state.open("Please Enter Name");
        for c in "Sports".chars() {
            assert_eq!(state.handle_key(key(KeyCode::Char(c))), PromptOutcome::Pending);
        }
        let outcome = state.handle_key(key(KeyCode::Enter));
        assert_eq!(outcome, PromptOutcome::Closed(Some("Sports".into())));
        assert!(!state.is_visible());
    }

    #[test]
    fn esc_closes_with_nothing() {
        let mut state = PromptDialogState::new();
        state.open("Please Enter Name");
        state.handle_key(key(KeyCode::Char('x')));
        let outcome = state.handle_key(key(KeyCode::Esc));
        assert_eq!(outcome, PromptOutcome::Closed(None));
    }

    #[test]
    fn reopening_starts_with_empty_input() {
        let mut state = PromptDialogState::new();
        state.open("Please Enter Name");
        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(key(KeyCode::Enter));
        state.open("Please Enter Name");
        let outcome = state.handle_key(key(KeyCode::Enter));
        assert_eq!(outcome, PromptOutcome::Closed(Some(String::new())));
    }
}
