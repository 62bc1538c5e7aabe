// ABOUTME: Centered overlay listing gateway suggestions for the current wizard step

use crate::app::AppState;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct SuggestionPopupComponent;

impl SuggestionPopupComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(popup) = &state.suggestion_popup else {
            return;
        };

        let width = 64.min(area.width.saturating_sub(4));
        let height = (popup.items.len() as u16 + 4).min(area.height.saturating_sub(4));
        let popup_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = popup
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == popup.selected {
                    Style::default().fg(Color::Black).bg(ACCENT)
                } else {
                    Style::default()
                };
                ListItem::new(item.as_str()).style(style)
            })
            .collect();
        frame.render_widget(List::new(items), chunks[0]);

        let hints = Paragraph::new("↑↓ choose   Enter accept   Esc dismiss")
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[1]);
    }
}

impl Default for SuggestionPopupComponent {
    fn default() -> Self {
        Self::new()
    }
}
