// ABOUTME: Storyboard view with the script editor, progress gauge, and shot cards

use crate::app::AppState;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct StoryboardComponent;

impl StoryboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Script editor
                Constraint::Length(3), // Progress
                Constraint::Min(5),    // Shots
                Constraint::Length(2), // Hints
            ])
            .split(area);

        self.render_script(frame, chunks[0], state);
        self.render_progress(frame, chunks[1], state);
        self.render_shots(frame, chunks[2], state);
        self.render_hints(frame, chunks[3]);
    }

    fn render_script(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = if state.storyboard_busy {
            " Script (generating...) "
        } else {
            " Script "
        };
        let mut lines: Vec<Line> = state
            .storyboard_script
            .lines()
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        if state.storyboard_script.is_empty() {
            lines = vec![Line::from(Span::styled(
                "Paste a script or scene description to break down into shots.",
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            ))];
        }
        let editor = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(ACCENT)),
            );
        frame.render_widget(editor, area);

        if !state.storyboard_busy && !state.storyboard_script.is_empty() {
            let (line, col) = state.storyboard_script.cursor_position();
            let x = area.x + 1 + col as u16;
            let y = area.y + 1 + line as u16;
            if x < area.right() - 1 && y < area.bottom() - 1 {
                frame.set_cursor(x, y);
            }
        }
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let label = if state.storyboard_busy {
            format!("Dreaming up shots... {}%", state.storyboard_progress)
        } else if state.storyboard_progress == 100 {
            format!("{} shots ready", state.storyboard_shots.len())
        } else {
            "Ctrl+G to generate".to_string()
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
            .gauge_style(Style::default().fg(GOLD))
            .percent(state.storyboard_progress)
            .label(label);
        frame.render_widget(gauge, area);
    }

    fn render_shots(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" Storyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.storyboard_shots.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No shots yet.",
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        // Shot cards are read-only; PageUp/PageDown move the window.
        let mut lines: Vec<Line> = Vec::new();
        for (i, shot) in state
            .storyboard_shots
            .iter()
            .enumerate()
            .skip(state.storyboard_scroll)
        {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Shot {} ", i + 1),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "{} / {} / {}",
                        shot.shot_details.shot_type,
                        shot.shot_details.camera_angle,
                        shot.shot_details.camera_movement
                    ),
                    Style::default().fg(ACCENT),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  \"{}\"", shot.screenplay_line),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(format!("  {}", shot.shot_details.description)));
            lines.push(Line::from(Span::styled(
                format!("  Lighting: {}", shot.shot_details.lighting_mood),
                Style::default().fg(MUTED),
            )));
            lines.push(Line::from(""));
        }
        let list = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(list, inner);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = Line::from(vec![
            Span::styled("Ctrl+G", Style::default().fg(ACCENT)),
            Span::raw(" generate  "),
            Span::styled("PgUp/PgDn", Style::default().fg(ACCENT)),
            Span::raw(" scroll  "),
            Span::styled("Ctrl+E", Style::default().fg(ACCENT)),
            Span::raw(" continue  "),
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::raw(" landing"),
        ]);
        let bar = Paragraph::new(hints)
            .style(Style::default().fg(MUTED))
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(MUTED)));
        frame.render_widget(bar, area);
    }
}

impl Default for StoryboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
