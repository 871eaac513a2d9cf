//! Selection control widget
//!
//! Renders a [`SelectControl`] as a bordered list. The option tags are the
//! styling hook: originals plain, the sentinel cyan italic, created entries
//! green, so users can tell server-created entries apart at a glance.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::select::{OptionTag, SelectControl};

/// Widget rendering one selection control
pub struct SelectView<'a> {
    title: &'a str,
}

impl<'a> SelectView<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    fn tag_style(tag: OptionTag) -> Style {
        match tag {
            OptionTag::Original => Style::default().fg(Color::White),
            OptionTag::Sentinel => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
            OptionTag::Created => Style::default().fg(Color::Green),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, control: &SelectControl) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(control.len());
        for (i, option) in control.options().iter().enumerate() {
            let is_selected = i == control.selected_index();
            let marker = if is_selected { "▶ " } else { "  " };
            let mut style = Self::tag_style(option.tag);
            if is_selected {
                style = style.add_modifier(Modifier::BOLD).bg(Color::Rgb(40, 60, 80));
            }
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(option.text.clone(), style),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectConfig;
    use crate::select::{augment, SelectOption};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_every_option_with_selection_marker() {
        let mut control = SelectControl::new(
            "/categories",
            vec![SelectOption::original("", "Choose one")],
        )
        .unwrap();
        augment(&mut control, &SelectConfig::default());

        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        SelectView::new("Category").render(area, &mut buf, &control);

        assert!(row_text(&buf, 0).contains("Category"));
        assert!(row_text(&buf, 1).contains("▶ Choose one"));
        assert!(row_text(&buf, 2).contains("-- Create New --"));
        assert!(!row_text(&buf, 2).contains('▶'));
    }
}
