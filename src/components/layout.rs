// ABOUTME: Top-level layout dispatching to the active view and drawing overlays

use crate::app::{state::NotificationType, AppState, View};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::{
    BuilderComponent, HelpComponent, LandingComponent, SaveDialogComponent, StoryboardComponent,
    SuggestionPopupComponent, VisualEditorComponent,
};

pub struct LayoutComponent {
    landing: LandingComponent,
    builder: BuilderComponent,
    storyboard: StoryboardComponent,
    visual_editor: VisualEditorComponent,
    suggestion_popup: SuggestionPopupComponent,
    save_dialog: SaveDialogComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            landing: LandingComponent::new(),
            builder: BuilderComponent::new(),
            storyboard: StoryboardComponent::new(),
            visual_editor: VisualEditorComponent::new(),
            suggestion_popup: SuggestionPopupComponent::new(),
            save_dialog: SaveDialogComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        match state.current_view {
            View::Landing => self.landing.render(frame, area, state),
            View::Builder => self.builder.render(frame, area, state),
            View::Storyboard => self.storyboard.render(frame, area, state),
            View::VisualEditor => self.visual_editor.render(frame, area, state),
        }

        // Overlays stack on top of the active view, dialogs above popups.
        self.suggestion_popup.render(frame, area, state);
        self.save_dialog.render(frame, area, state);
        if state.help_visible {
            self.help.render(frame, area);
        }
        self.render_notifications(frame, area, state);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.notifications.is_empty() {
            return;
        }
        let width = 44.min(area.width.saturating_sub(2));
        let mut y = area.y + 1;
        for notification in state.notifications.iter().rev().take(3) {
            let height = 3;
            if y + height > area.bottom() {
                break;
            }
            let notif_area = Rect {
                x: area.right().saturating_sub(width + 1),
                y,
                width,
                height,
            };
            let color = match notification.notification_type {
                NotificationType::Success => Color::Green,
                NotificationType::Error => Color::Red,
                NotificationType::Info => Color::Cyan,
            };
            frame.render_widget(Clear, notif_area);
            let widget = Paragraph::new(notification.message.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color)),
                );
            frame.render_widget(widget, notif_area);
            y += height;
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
