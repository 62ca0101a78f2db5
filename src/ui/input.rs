use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

/// A single-line text input with a prompt, a block cursor, and an optional
/// placeholder shown while the input is empty.
pub struct TextInput<'a> {
    pub prompt: &'a str,
    pub text: &'a str,
    pub placeholder: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    pub fn new(prompt: &'a str, text: &'a str) -> Self {
        Self {
            prompt,
            text,
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let display = format!("{}{}\u{2588}", self.prompt, self.text);
        // If the display is wider than the area, show the rightmost portion.
        let visible = tail_chars(&display, area.width as usize);

        buf.set_string(area.x, area.y, visible, Style::default().fg(Color::White));

        if self.text.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            let x = area.x + visible.chars().count() as u16 + 1;
            if x < area.x + area.width {
                buf.set_string(
                    x,
                    area.y,
                    placeholder,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                );
            }
        }
    }
}

/// Keep at most `max` trailing chars, never splitting a char.
fn tail_chars(s: &str, max: usize) -> &str {
    let count = s.chars().count();
    if count <= max {
        return s;
    }
    match s.char_indices().nth(count - max) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::tail_chars;

    #[test]
    fn tail_chars_keeps_short_strings() {
        assert_eq!(tail_chars("/1743905\u{2588}", 80), "/1743905\u{2588}");
    }

    #[test]
    fn tail_chars_truncates_on_char_boundaries() {
        // Multibyte input in a narrow terminal; a byte-index slice would panic.
        assert_eq!(tail_chars("café café\u{2588}", 4), "afé\u{2588}");
        assert_eq!(tail_chars("ééé", 0), "");
    }
}
