use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Static idle/help content shown before any report is loaded.
pub struct WelcomeView {
    loading: bool,
}

impl WelcomeView {
    pub fn new() -> Self {
        Self { loading: false }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Default for WelcomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for WelcomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Academic Profile Analyzer ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.loading {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "Analyzing...",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let hint_style = Style::default().fg(Color::DarkGray);
        let id_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(Span::styled("How It Works", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(
                "Press / and enter a Semantic Scholar researcher ID. The analysis \
                 service scores publication and citation patterns to produce an \
                 assessment of impact and consistency.",
            ),
            Line::from(""),
            Line::from(vec![
                Span::raw("Try IDs like "),
                Span::styled("1743905", id_style),
                Span::raw(" (D. Sculley) or "),
                Span::styled("145896939", id_style),
                Span::raw(" (Geoffrey Hinton)."),
            ]),
            Line::from(""),
            Line::from(Span::styled("Press ? for keybindings.", hint_style)),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
