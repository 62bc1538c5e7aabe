// ABOUTME: Full-screen help overlay listing key bindings per view

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 62.min(area.width.saturating_sub(4));
        let height = 22.min(area.height.saturating_sub(2));
        let help_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, help_area);

        let key = |k: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {k:<12}"), Style::default().fg(ACCENT)),
                Span::raw(what),
            ])
        };
        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ))
        };

        let lines = vec![
            section("Global"),
            key("Ctrl+Q", "quit"),
            key("F1", "toggle this help"),
            Line::from(""),
            section("Landing"),
            key("Ctrl+B", "open the prompt builder"),
            key("Ctrl+T", "open script to storyboard"),
            key("Ctrl+D", "let AI dream a story from your idea"),
            Line::from(""),
            section("Builder"),
            key("Ctrl+N / Tab", "next question"),
            key("Ctrl+P", "previous question"),
            key("Ctrl+I", "AI inspiration for this question"),
            key("Ctrl+G", "AI suggestions popup"),
            key("Ctrl+E", "fill with a local example"),
            key("Ctrl+O", "save this configuration"),
            Line::from(""),
            section("Storyboard"),
            key("Ctrl+G", "generate shots from the script"),
            key("PgUp/PgDn", "scroll shots"),
            key("Ctrl+E", "continue to the visual editor"),
        ];

        let help = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(help, help_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
