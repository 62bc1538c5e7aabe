// ABOUTME: Builder view rendering the wizard step, progress gauge, and input widgets

use crate::app::AppState;
use crate::wizard::StepKind;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const MUTED: Color = Color::Rgb(120, 120, 140);

pub struct BuilderComponent;

impl BuilderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress
                Constraint::Length(4), // Category + prompt
                Constraint::Min(5),    // Input
                Constraint::Length(2), // Hints
            ])
            .split(area);

        self.render_progress(frame, chunks[0], state);
        self.render_prompt(frame, chunks[1], state);
        match state.wizard.current_step().kind {
            StepKind::Text | StepKind::Script => self.render_text_input(frame, chunks[2], state),
            StepKind::Select => self.render_options(frame, chunks[2], state),
        }
        self.render_hints(frame, chunks[3], state);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let label = if state.app_config.ui_preferences.show_progress_percent {
            format!(
                "Step {} of {} ({}%)",
                state.wizard.current_index() + 1,
                state.wizard.step_count(),
                state.wizard.progress_percent()
            )
        } else {
            format!(
                "Step {} of {}",
                state.wizard.current_index() + 1,
                state.wizard.step_count()
            )
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
            .gauge_style(Style::default().fg(ACCENT))
            .ratio(state.wizard.progress_fraction())
            .label(label);
        frame.render_widget(gauge, area);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.current_step();
        let busy_note = if state.builder_busy {
            Span::styled("  (asking the gateway...)", Style::default().fg(GOLD))
        } else {
            Span::raw("")
        };
        let text = vec![
            Line::from(Span::styled(
                step.category,
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![Span::raw(step.prompt), busy_note]),
        ];
        let prompt = Paragraph::new(text).wrap(Wrap { trim: true });
        frame.render_widget(prompt, area);
    }

    fn render_text_input(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.current_step();
        let mut lines: Vec<Line> = state
            .builder_input
            .lines()
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        if state.builder_input.is_empty() && !step.placeholder.is_empty() {
            lines = vec![Line::from(Span::styled(
                step.placeholder,
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            ))];
        }
        let input = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Your answer ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(ACCENT)),
            );
        frame.render_widget(input, area);

        if !state.builder_input.is_empty() {
            let (line, col) = state.builder_input.cursor_position();
            let x = area.x + 1 + col as u16;
            let y = area.y + 1 + line as u16;
            if x < area.right() - 1 && y < area.bottom() - 1 {
                frame.set_cursor(x, y);
            }
        }
    }

    fn render_options(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.current_step();
        let recorded = state.wizard.current_answer();
        let items: Vec<ListItem> = step
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let highlighted = i == state.selected_option;
                let chosen = recorded == Some(*option);
                let marker = if chosen { "● " } else { "  " };
                let style = if highlighted {
                    Style::default().fg(Color::Black).bg(ACCENT)
                } else if chosen {
                    Style::default().fg(GOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{marker}{option}")).style(style)
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(" Choose one ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        );
        frame.render_widget(list, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let select = state.wizard.current_step().kind == StepKind::Select;
        let mut hints = vec![
            Span::styled("Ctrl+N", Style::default().fg(ACCENT)),
            Span::raw(" next  "),
            Span::styled("Ctrl+P", Style::default().fg(ACCENT)),
            Span::raw(" back  "),
        ];
        if select {
            hints.push(Span::styled("↑↓ Enter", Style::default().fg(ACCENT)));
            hints.push(Span::raw(" choose  "));
        } else {
            hints.push(Span::styled("Ctrl+I", Style::default().fg(ACCENT)));
            hints.push(Span::raw(" inspire  "));
            hints.push(Span::styled("Ctrl+E", Style::default().fg(ACCENT)));
            hints.push(Span::raw(" example  "));
        }
        hints.extend([
            Span::styled("Ctrl+G", Style::default().fg(ACCENT)),
            Span::raw(" suggest  "),
            Span::styled("Ctrl+O", Style::default().fg(ACCENT)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::raw(" landing"),
        ]);
        let bar = Paragraph::new(Line::from(hints))
            .style(Style::default().fg(MUTED))
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(MUTED)));
        frame.render_widget(bar, area);
    }
}

impl Default for BuilderComponent {
    fn default() -> Self {
        Self::new()
    }
}
