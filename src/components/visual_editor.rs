// ABOUTME: Placeholder final stage showing the completed answer record

use crate::app::AppState;
use crate::wizard::CATALOG;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct VisualEditorComponent;

impl VisualEditorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Banner
                Constraint::Min(5),    // Answer summary
                Constraint::Length(2), // Hints
            ])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                "Visual sequence editor coming soon",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your cinematic prompt is ready below.",
                Style::default().fg(MUTED),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        for step in CATALOG {
            let answer = state.wizard.answer(step.id).unwrap_or("—");
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", step.id),
                    Style::default().fg(ACCENT),
                ),
                Span::raw(answer.to_string()),
            ]));
        }
        let summary = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Answer record ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(MUTED)),
            );
        frame.render_widget(summary, chunks[1]);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::raw(" back to landing  "),
            Span::styled("Ctrl+Q", Style::default().fg(ACCENT)),
            Span::raw(" quit"),
        ]))
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[2]);
    }
}

impl Default for VisualEditorComponent {
    fn default() -> Self {
        Self::new()
    }
}
