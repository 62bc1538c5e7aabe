// ABOUTME: Name-entry dialog for saving the current answer record

use crate::app::AppState;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct SaveDialogComponent;

impl SaveDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(dialog) = &state.save_dialog else {
            return;
        };

        let width = 50.min(area.width.saturating_sub(4));
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height.saturating_sub(6) / 2,
            width,
            height: 6,
        };

        frame.render_widget(Clear, dialog_area);
        let block = Block::default()
            .title(" Save configuration ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new("Name this configuration:"), chunks[0]);

        let name = Paragraph::new(dialog.name.as_str())
            .style(Style::default().add_modifier(Modifier::UNDERLINED));
        frame.render_widget(name, chunks[1]);
        frame.set_cursor(chunks[1].x + dialog.name.len() as u16, chunks[1].y);

        let hints = Paragraph::new("Enter save   Esc cancel")
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }
}

impl Default for SaveDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
