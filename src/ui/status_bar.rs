use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::app::{App, AppMode};

/// Bottom status bar showing mode, current query, and status messages.
pub struct StatusBar<'a> {
    pub app: &'a App,
}

impl<'a> StatusBar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        let mut spans = Vec::new();

        // Mode indicator
        let mode_str = match self.app.mode {
            AppMode::Normal => " NORMAL ",
            AppMode::Command => " COMMAND ",
            AppMode::Search => " SEARCH ",
        };
        let mode_style = Style::default()
            .bg(match self.app.mode {
                AppMode::Normal => Color::Blue,
                AppMode::Command => Color::Magenta,
                AppMode::Search => Color::Yellow,
            })
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        spans.push(Span::styled(mode_str, mode_style));
        spans.push(Span::raw(" "));

        // Current query
        let query = &self.app.analysis.query;
        let label = if query.is_empty() {
            self.app.config.base_url.clone()
        } else {
            format!("Researcher: {query}")
        };
        spans.push(Span::styled(label, bg_style));

        // Loading indicator
        if self.app.analysis.is_loading() {
            spans.push(Span::styled(
                " [analyzing...]",
                Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            ));
        }

        // Status message (right-aligned)
        if let Some(ref msg) = self.app.status_message {
            let left_width: usize = spans.iter().map(|s| s.width()).sum();
            let visible = head_chars(msg, area.width as usize);
            let padding =
                (area.width as usize).saturating_sub(left_width + visible.chars().count());
            if padding > 0 {
                spans.push(Span::styled(" ".repeat(padding), bg_style));
            }
            spans.push(Span::styled(
                visible,
                Style::default().bg(Color::DarkGray).fg(Color::Red),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Truncate to at most `max` leading chars, never splitting a char.
fn head_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::head_chars;

    #[test]
    fn head_chars_keeps_short_strings() {
        assert_eq!(head_chars("Unknown command: x", 40), "Unknown command: x");
    }

    #[test]
    fn head_chars_truncates_on_char_boundaries() {
        // "é" is two bytes; a byte-index slice at 3 would panic.
        assert_eq!(head_chars("ééé", 2), "éé");
        assert_eq!(head_chars("ééé", 0), "");
    }
}
