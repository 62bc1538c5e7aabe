// ABOUTME: Landing view with the idea editor and the three flow entry points

use crate::app::AppState;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Banner
                Constraint::Min(6),    // Idea editor
                Constraint::Length(5), // Flow buttons
            ])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                "DREAMER",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Cinematic prompt builder",
                Style::default().fg(MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
        frame.render_widget(banner, chunks[0]);

        let editor_title = if state.landing_busy {
            " Your idea (dreaming...) "
        } else {
            " Your idea "
        };
        let mut lines: Vec<Line> = state
            .landing_idea
            .lines()
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        if state.landing_idea.is_empty() {
            lines = vec![Line::from(Span::styled(
                "A seed of a scene, a mood, a fragment of script...",
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            ))];
        }
        let editor = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(editor_title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(ACCENT)),
            );
        frame.render_widget(editor, chunks[1]);

        if !state.landing_idea.is_empty() {
            let (line, col) = state.landing_idea.cursor_position();
            let x = chunks[1].x + 1 + col as u16;
            let y = chunks[1].y + 1 + line as u16;
            if x < chunks[1].right() - 1 && y < chunks[1].bottom() - 1 {
                frame.set_cursor(x, y);
            }
        }

        let buttons = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Ctrl+B", Style::default().fg(ACCENT)),
                Span::raw("  Prompt Builder    "),
                Span::styled("Ctrl+T", Style::default().fg(ACCENT)),
                Span::raw("  Script to Storyboard    "),
                Span::styled("Ctrl+D", Style::default().fg(ACCENT)),
                Span::raw("  Let AI Dream"),
            ]),
            Line::from(Span::styled(
                "F1 help    Ctrl+Q quit",
                Style::default().fg(MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(MUTED)));
        frame.render_widget(buttons, chunks[2]);
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}
