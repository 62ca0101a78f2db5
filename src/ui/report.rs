use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::api::types::AnalysisReport;

/// Analysis report view: header, rating badge, summary, and the per-category
/// breakdown.
pub struct ReportView<'a> {
    pub report: &'a AnalysisReport,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Analysis: {} ", self.report.author_name))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(report_lines(self.report)).wrap(Wrap { trim: false });
        paragraph.render(inner, buf);
    }
}

/// Build the display lines for a report. Pure: the same report always yields
/// the same lines.
pub fn report_lines(report: &AnalysisReport) -> Vec<Line<'_>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let section_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(report.author_name.as_str(), value_style),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", report.final_rating),
                Style::default()
                    .bg(rating_color(&report.final_rating))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Final Score: ", label_style),
            Span::styled(format_score(report.final_score), value_style),
            Span::styled("  Confidence: ", label_style),
            Span::styled(format_score(report.confidence_score), value_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Summary", section_style)),
        Line::from(Span::raw(report.summary.as_str())),
        Line::from(""),
        Line::from(Span::styled("Breakdown", section_style)),
    ];

    for (key, entry) in &report.breakdown {
        let score_style = if entry.is_positive() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let indicator = if entry.is_positive() { "\u{25B2}" } else { "\u{25BC}" };

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format_title(key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(entry.analysis.as_str())));
        lines.push(Line::from(Span::styled(
            format!("{indicator} Score: {}", format_score(entry.score)),
            score_style,
        )));
    }

    lines
}

/// Convert a snake-case category key into space-separated, capitalized words.
pub fn format_title(key: &str) -> String {
    key.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Badge color for a rating label, matched case-insensitively.
pub fn rating_color(label: &str) -> Color {
    match label.to_lowercase().as_str() {
        "excellent" | "outstanding" => Color::Green,
        "good" => Color::LightGreen,
        "average" | "fair" => Color::Yellow,
        "poor" | "weak" => Color::Red,
        _ => Color::Gray,
    }
}

/// Render a score without a trailing ".0" on whole numbers.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BreakdownEntry;
    use std::collections::BTreeMap;

    fn sample_report() -> AnalysisReport {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(
            "citation_impact".to_string(),
            BreakdownEntry {
                analysis: "Above average.".into(),
                score: 3.0,
            },
        );
        breakdown.insert(
            "recent_output".to_string(),
            BreakdownEntry {
                analysis: "Declining publication rate.".into(),
                score: -1.5,
            },
        );
        AnalysisReport {
            author_name: "D. Sculley".into(),
            final_score: 7.2,
            confidence_score: 0.8,
            final_rating: "Good".into(),
            summary: "Consistent output.".into(),
            breakdown,
        }
    }

    fn rendered_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("citation_impact"), "Citation Impact");
        assert_eq!(format_title("summary"), "Summary");
        assert_eq!(format_title("h_index_trend"), "H Index Trend");
    }

    #[test]
    fn test_rating_color_is_case_insensitive() {
        assert_eq!(rating_color("Good"), rating_color("GOOD"));
        assert_eq!(rating_color("Excellent"), Color::Green);
        assert_eq!(rating_color("unheard-of"), Color::Gray);
    }

    #[test]
    fn breakdown_renders_one_block_per_key() {
        let report = sample_report();
        let text = rendered_text(&report_lines(&report));
        assert!(text.contains("Citation Impact"));
        assert!(text.contains("Above average."));
        assert!(text.contains("Recent Output"));
        assert!(text.contains("Declining publication rate."));
    }

    #[test]
    fn score_polarity_indicators() {
        let report = sample_report();
        let text = rendered_text(&report_lines(&report));
        assert!(text.contains("\u{25B2} Score: 3"));
        assert!(text.contains("\u{25BC} Score: -1.5"));
    }

    #[test]
    fn header_carries_scores_and_summary() {
        let report = sample_report();
        let text = rendered_text(&report_lines(&report));
        assert!(text.contains("D. Sculley"));
        assert!(text.contains("Final Score: 7.2"));
        assert!(text.contains("Confidence: 0.8"));
        assert!(text.contains("Consistent output."));
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = sample_report();
        assert_eq!(report_lines(&report), report_lines(&report));
    }
}
