//! Single-line text input state with cursor management

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Single-line text input state
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    input: String,
    /// Cursor position as a char offset into `input`
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, exactly as typed
    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Take the value out, resetting the input
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    fn byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Render the text with a reversed-style cursor cell
    pub fn render(&self, area: Rect, buf: &mut Buffer, style: Style) {
        Paragraph::new(self.input.as_str())
            .style(style)
            .render(area, buf);

        if area.width > 0 {
            let cursor_x = area.x + (self.cursor as u16).min(area.width.saturating_sub(1));
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_round_trip() {
        let mut input = TextInputState::new();
        for c in "Sport".chars() {
            input.insert_char(c);
        }
        input.insert_char('s');
        assert_eq!(input.value(), "Sports");
        input.delete_char();
        assert_eq!(input.value(), "Sport");
    }

    #[test]
    fn insert_at_cursor_after_movement() {
        let mut input = TextInputState::new();
        for c in "at".chars() {
            input.insert_char(c);
        }
        input.move_start();
        input.move_right();
        input.insert_char('r');
        assert_eq!(input.value(), "art");
        input.move_end();
        input.insert_char('s');
        assert_eq!(input.value(), "arts");
    }

    #[test]
    fn multibyte_input_is_edited_by_chars() {
        let mut input = TextInputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.delete_char();
        input.delete_char();
        input.delete_char();
        input.delete_char();
        assert_eq!(input.value(), "h");
    }

    #[test]
    fn take_resets_the_input() {
        let mut input = TextInputState::new();
        input.insert_char('x');
        assert_eq!(input.take(), "x");
        assert!(input.is_empty());
    }
}
