// ABOUTME: Application state management and view switching logic for the dreamer TUI

use crate::config::AppConfig;
use crate::gemini::{GeminiClient, StoryboardShot};
use crate::models::{ConfigStore, SavedConfiguration};
use crate::wizard::{Advance, StepKind, WizardSession};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Multiline text editor with cursor support for idea and script inputs.
#[derive(Debug, Clone)]
pub struct TextEditor {
    lines: Vec<String>,
    cursor_line: usize,
    cursor_col: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
        }
    }

    pub fn from_string(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.lines().map(ToString::to_string).collect()
        };
        let mut editor = Self {
            lines,
            cursor_line: 0,
            cursor_col: 0,
        };
        editor.move_cursor_to_end();
        editor
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
        } else {
            self.lines[self.cursor_line].insert(self.cursor_col, ch);
            self.cursor_col += ch.len_utf8();
        }
    }

    pub fn insert_newline(&mut self) {
        let current = self.lines[self.cursor_line].clone();
        let (left, right) = current.split_at(self.cursor_col);
        self.lines[self.cursor_line] = left.to_string();
        self.lines.insert(self.cursor_line + 1, right.to_string());
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            // Step back over one char, not one byte
            let prev = self.lines[self.cursor_line][..self.cursor_col]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
            self.lines[self.cursor_line].remove(prev);
            self.cursor_col = prev;
        } else if self.cursor_line > 0 {
            let current = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].len();
            self.lines[self.cursor_line].push_str(&current);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col = self.lines[self.cursor_line][..self.cursor_col]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].len();
        }
    }

    pub fn move_cursor_right(&mut self) {
        let line_len = self.lines[self.cursor_line].len();
        if self.cursor_col < line_len {
            self.cursor_col += self.lines[self.cursor_line][self.cursor_col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        } else if self.cursor_line < self.lines.len() - 1 {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.cursor_col.min(self.lines[self.cursor_line].len());
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_line < self.lines.len() - 1 {
            self.cursor_line += 1;
            self.cursor_col = self.cursor_col.min(self.lines[self.cursor_line].len());
        }
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_line = self.lines.len() - 1;
        self.cursor_col = self.lines[self.cursor_line].len();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,      // Idea entry and flow selection
    Builder,      // The 12-step wizard
    Storyboard,   // Script to storyboard breakdown
    VisualEditor, // Placeholder final stage ("editor coming soon")
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Success,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Error,
            created_at: Instant::now(),
            duration: Duration::from_secs(8),
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

// ============================================================================
// AI request plumbing
// ============================================================================

/// Gateway work queued by the event handler and spawned during `tick()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    GenerateStory,
    FetchInspiration,
    FetchSuggestions,
    GenerateStoryboard,
}

/// Result of a spawned gateway call, delivered back to the main loop over a
/// channel. Errors travel as display strings; the task already logged them.
#[derive(Debug, Clone)]
pub enum AiOutcome {
    Story(Result<Vec<String>, String>),
    Inspiration {
        step_id: String,
        result: Result<String, String>,
    },
    Suggestions {
        step_id: String,
        result: Result<Vec<String>, String>,
    },
    Storyboard(Result<Vec<StoryboardShot>, String>),
}

/// Overlay listing gateway suggestions for the current step.
#[derive(Debug, Clone)]
pub struct SuggestionPopup {
    pub items: Vec<String>,
    pub selected: usize,
}

/// Name-entry dialog for saving the current answer record.
#[derive(Debug, Clone, Default)]
pub struct SaveDialog {
    pub name: String,
}

// Cosmetic storyboard progress: +5 per tick interval, capped below 100 until
// the request actually settles. Mirrors the original's simulated interval.
const PROGRESS_TICK: Duration = Duration::from_millis(250);
const PROGRESS_STEP: u16 = 5;
const PROGRESS_CAP: u16 = 95;

#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub should_quit: bool,
    pub help_visible: bool,

    // Landing
    pub landing_idea: TextEditor,
    pub landing_busy: bool,

    // Builder
    pub wizard: WizardSession,
    pub builder_input: TextEditor,
    pub selected_option: usize,
    pub builder_busy: bool,
    pub suggestion_popup: Option<SuggestionPopup>,
    pub save_dialog: Option<SaveDialog>,

    // Storyboard
    pub storyboard_script: TextEditor,
    pub storyboard_shots: Vec<StoryboardShot>,
    pub storyboard_busy: bool,
    pub storyboard_progress: u16,
    pub storyboard_scroll: usize,
    last_progress_tick: Option<Instant>,

    // Async plumbing
    pub pending_async_action: Option<AsyncAction>,
    ai_tx: mpsc::UnboundedSender<AiOutcome>,
    ai_rx: mpsc::UnboundedReceiver<AiOutcome>,

    // Services
    pub gemini: Option<GeminiClient>,
    pub config_store: Option<ConfigStore>,
    pub app_config: AppConfig,

    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        let app_config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });

        let gemini = match GeminiClient::from_config(&app_config.gemini) {
            Ok(client) => Some(client),
            Err(e) => {
                info!("Gemini client unavailable: {e}");
                None
            }
        };

        let config_store = AppConfig::saved_configs_dir().ok().map(ConfigStore::new);
        let (ai_tx, ai_rx) = mpsc::unbounded_channel();

        Self {
            current_view: View::Landing,
            should_quit: false,
            help_visible: false,
            landing_idea: TextEditor::new(),
            landing_busy: false,
            wizard: WizardSession::new(),
            builder_input: TextEditor::new(),
            selected_option: 0,
            builder_busy: false,
            suggestion_popup: None,
            save_dialog: None,
            storyboard_script: TextEditor::new(),
            storyboard_shots: Vec::new(),
            storyboard_busy: false,
            storyboard_progress: 0,
            storyboard_scroll: 0,
            last_progress_tick: None,
            pending_async_action: None,
            ai_tx,
            ai_rx,
            gemini,
            config_store,
            app_config,
            notifications: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Open the Builder, seeding the wizard with the landing idea.
    pub fn start_builder(&mut self) {
        let idea = self.landing_idea.text();
        self.wizard = WizardSession::with_seed_idea(idea.trim());
        self.suggestion_popup = None;
        self.builder_busy = false;
        self.sync_builder_input();
        self.current_view = View::Builder;
    }

    /// Open the Storyboard view, seeding the script with the landing idea.
    pub fn start_storyboard(&mut self) {
        let idea = self.landing_idea.text();
        if !idea.trim().is_empty() {
            self.storyboard_script = TextEditor::from_string(&idea);
        }
        self.current_view = View::Storyboard;
    }

    /// Load the current wizard answer into the builder input widgets.
    pub fn sync_builder_input(&mut self) {
        let step = self.wizard.current_step();
        match step.kind {
            StepKind::Text | StepKind::Script => {
                let answer = self.wizard.current_answer().unwrap_or("").to_string();
                self.builder_input = TextEditor::from_string(&answer);
            }
            StepKind::Select => {
                self.selected_option = self
                    .wizard
                    .current_answer()
                    .and_then(|a| step.options.iter().position(|o| *o == a))
                    .unwrap_or(0);
            }
        }
    }

    // ------------------------------------------------------------------
    // Builder transitions
    // ------------------------------------------------------------------

    /// Persist whatever the input widgets hold into the answer record.
    pub fn builder_commit_input(&mut self) {
        match self.wizard.current_step().kind {
            StepKind::Text | StepKind::Script => {
                let text = self.builder_input.text();
                self.wizard.record_answer(text);
            }
            // Select answers are recorded on explicit confirmation only.
            StepKind::Select => {}
        }
    }

    /// Move to the next step, or to the final stage from the last step.
    /// Transient suggestion state never crosses a step boundary.
    pub fn builder_advance(&mut self) {
        self.builder_commit_input();
        self.suggestion_popup = None;
        match self.wizard.advance() {
            Advance::Moved => self.sync_builder_input(),
            Advance::Complete => {
                info!("Wizard complete, moving to visual editor");
                self.current_view = View::VisualEditor;
            }
        }
    }

    pub fn builder_retreat(&mut self) {
        self.builder_commit_input();
        self.suggestion_popup = None;
        self.wizard.retreat();
        self.sync_builder_input();
    }

    pub fn builder_option_up(&mut self) {
        self.selected_option = self.selected_option.saturating_sub(1);
    }

    pub fn builder_option_down(&mut self) {
        let count = self.wizard.current_step().options.len();
        if count > 0 && self.selected_option < count - 1 {
            self.selected_option += 1;
        }
    }

    /// Record the highlighted option as the answer for a select step.
    pub fn builder_confirm_option(&mut self) {
        let step = self.wizard.current_step();
        if step.kind == StepKind::Select {
            if let Some(option) = step.options.get(self.selected_option) {
                let value = (*option).to_string();
                self.wizard.record_answer(value);
            }
        }
    }

    /// Fill the answer with a random catalog example, fully local.
    pub fn builder_local_example(&mut self) {
        if let Some(example) = self.wizard.current_step().random_example() {
            self.wizard.record_answer(example);
            self.sync_builder_input();
        }
    }

    // ------------------------------------------------------------------
    // AI requests
    // ------------------------------------------------------------------

    fn gateway_ready(&mut self) -> bool {
        if self.gemini.is_none() {
            self.add_notification(Notification::error(
                "No Gemini API key configured. Set GEMINI_API_KEY to enable AI help.".to_string(),
            ));
            return false;
        }
        true
    }

    pub fn request_story(&mut self) {
        if self.landing_busy || self.landing_idea.text().trim().is_empty() {
            return;
        }
        if !self.gateway_ready() {
            return;
        }
        self.landing_busy = true;
        self.pending_async_action = Some(AsyncAction::GenerateStory);
    }

    pub fn request_inspiration(&mut self) {
        // Select steps take their answer from the option list, never from a
        // free-text gateway reply.
        if self.wizard.current_step().kind == StepKind::Select {
            return;
        }
        if self.builder_busy || !self.gateway_ready() {
            return;
        }
        self.builder_commit_input();
        self.builder_busy = true;
        self.pending_async_action = Some(AsyncAction::FetchInspiration);
    }

    pub fn request_suggestions(&mut self) {
        if self.wizard.current_step().kind == StepKind::Select {
            return;
        }
        if self.builder_busy || !self.gateway_ready() {
            return;
        }
        self.builder_commit_input();
        self.suggestion_popup = None;
        self.builder_busy = true;
        self.pending_async_action = Some(AsyncAction::FetchSuggestions);
    }

    pub fn request_storyboard(&mut self) {
        if self.storyboard_busy {
            return;
        }
        if self.storyboard_script.text().trim().is_empty() {
            self.add_notification(Notification::error(
                "Please enter a script first".to_string(),
            ));
            return;
        }
        if !self.gateway_ready() {
            return;
        }
        self.storyboard_busy = true;
        self.storyboard_shots.clear();
        self.storyboard_scroll = 0;
        self.storyboard_progress = 0;
        self.last_progress_tick = Some(Instant::now());
        self.pending_async_action = Some(AsyncAction::GenerateStoryboard);
    }

    /// Spawn the queued gateway call as a detached task. Results come back
    /// through the outcome channel; the UI stays responsive meanwhile.
    pub fn process_async_action(&mut self) {
        let Some(action) = self.pending_async_action.take() else {
            return;
        };
        let Some(client) = self.gemini.clone() else {
            // Guarded at request time; losing the client mid-flight just
            // drops the request.
            self.clear_busy_for(&action);
            return;
        };
        let tx = self.ai_tx.clone();
        let suggestion_limit = self.app_config.ui_preferences.suggestion_limit;

        match action {
            AsyncAction::GenerateStory => {
                let idea = self.landing_idea.text();
                tokio::spawn(async move {
                    let result = client.generate_story(&idea).await.map_err(|e| {
                        warn!("story generation failed: {e}");
                        e.to_string()
                    });
                    let _ = tx.send(AiOutcome::Story(result));
                });
            }
            AsyncAction::FetchInspiration => {
                let step_id = self.wizard.current_step().id.to_string();
                let context = self.wizard.scene_context();
                let prompt = self.wizard.current_step().prompt.to_string();
                tokio::spawn(async move {
                    let result = client.inspiration(&context, &prompt).await.map_err(|e| {
                        warn!("inspiration request failed: {e}");
                        e.to_string()
                    });
                    let _ = tx.send(AiOutcome::Inspiration { step_id, result });
                });
            }
            AsyncAction::FetchSuggestions => {
                let step_id = self.wizard.current_step().id.to_string();
                let context = self.wizard.scene_context();
                let prompt = self.wizard.current_step().prompt.to_string();
                tokio::spawn(async move {
                    let result = client
                        .suggestions(&context, &prompt, suggestion_limit)
                        .await
                        .map_err(|e| {
                            warn!("suggestions request failed: {e}");
                            e.to_string()
                        });
                    let _ = tx.send(AiOutcome::Suggestions { step_id, result });
                });
            }
            AsyncAction::GenerateStoryboard => {
                let script = self.storyboard_script.text();
                tokio::spawn(async move {
                    let result = client.storyboard(&script).await.map_err(|e| {
                        warn!("storyboard generation failed: {e}");
                        e.to_string()
                    });
                    let _ = tx.send(AiOutcome::Storyboard(result));
                });
            }
        }
    }

    fn clear_busy_for(&mut self, action: &AsyncAction) {
        match action {
            AsyncAction::GenerateStory => self.landing_busy = false,
            AsyncAction::FetchInspiration | AsyncAction::FetchSuggestions => {
                self.builder_busy = false;
            }
            AsyncAction::GenerateStoryboard => {
                self.storyboard_busy = false;
                self.last_progress_tick = None;
            }
        }
    }

    /// Apply one settled gateway call. A failure aborts that one operation:
    /// busy cleared, prior answers untouched, a notice shown. Responses for
    /// a step the user has already left are dropped so suggestion state
    /// never leaks across steps.
    pub fn apply_ai_outcome(&mut self, outcome: AiOutcome) {
        match outcome {
            AiOutcome::Story(result) => {
                self.landing_busy = false;
                match result {
                    Ok(scenes) => {
                        self.landing_idea = TextEditor::from_string(&scenes.join("\n\n"));
                        self.start_builder();
                    }
                    Err(e) => {
                        self.add_notification(Notification::error(format!(
                            "Failed to dream up a story: {e}"
                        )));
                    }
                }
            }
            AiOutcome::Inspiration { step_id, result } => {
                self.builder_busy = false;
                if step_id != self.wizard.current_step().id {
                    return;
                }
                match result {
                    Ok(inspiration) => {
                        self.wizard.record_answer(inspiration);
                        self.sync_builder_input();
                    }
                    Err(e) => {
                        self.add_notification(Notification::error(format!(
                            "Failed to get inspiration: {e}"
                        )));
                    }
                }
            }
            AiOutcome::Suggestions { step_id, result } => {
                self.builder_busy = false;
                if step_id != self.wizard.current_step().id {
                    return;
                }
                match result {
                    Ok(items) if !items.is_empty() => {
                        self.suggestion_popup = Some(SuggestionPopup { items, selected: 0 });
                    }
                    Ok(_) => {}
                    Err(e) => {
                        self.suggestion_popup = None;
                        self.add_notification(Notification::error(format!(
                            "Failed to get suggestions: {e}"
                        )));
                    }
                }
            }
            AiOutcome::Storyboard(result) => {
                self.storyboard_busy = false;
                self.last_progress_tick = None;
                match result {
                    Ok(shots) => {
                        self.storyboard_progress = 100;
                        self.storyboard_shots = shots;
                    }
                    Err(e) => {
                        self.storyboard_progress = 0;
                        self.add_notification(Notification::error(format!(
                            "Failed to generate storyboard: {e}"
                        )));
                    }
                }
            }
        }
    }

    /// Drain every settled outcome without blocking. Later responses
    /// overwrite earlier ones; nothing cancels a superseded request.
    pub fn drain_ai_outcomes(&mut self) {
        while let Ok(outcome) = self.ai_rx.try_recv() {
            self.apply_ai_outcome(outcome);
        }
    }

    #[cfg(test)]
    pub fn outcome_sender(&self) -> mpsc::UnboundedSender<AiOutcome> {
        self.ai_tx.clone()
    }

    /// Advance the cosmetic storyboard progress bar while a request is in
    /// flight. The displayed percentage is only loosely correlated with real
    /// completion; settling snaps it to 100.
    pub fn tick_storyboard_progress(&mut self) {
        if !self.storyboard_busy {
            return;
        }
        let now = Instant::now();
        let due = self
            .last_progress_tick
            .map_or(true, |last| now.duration_since(last) >= PROGRESS_TICK);
        if due {
            self.last_progress_tick = Some(now);
            self.storyboard_progress = (self.storyboard_progress + PROGRESS_STEP).min(PROGRESS_CAP);
        }
    }

    // ------------------------------------------------------------------
    // Suggestion popup
    // ------------------------------------------------------------------

    pub fn suggestion_up(&mut self) {
        if let Some(popup) = self.suggestion_popup.as_mut() {
            popup.selected = popup.selected.saturating_sub(1);
        }
    }

    pub fn suggestion_down(&mut self) {
        if let Some(popup) = self.suggestion_popup.as_mut() {
            if popup.selected < popup.items.len() - 1 {
                popup.selected += 1;
            }
        }
    }

    pub fn accept_suggestion(&mut self) {
        if let Some(popup) = self.suggestion_popup.take() {
            if let Some(item) = popup.items.get(popup.selected) {
                self.wizard.record_answer(item.clone());
                self.sync_builder_input();
            }
        }
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggestion_popup = None;
    }

    // ------------------------------------------------------------------
    // Saved configurations
    // ------------------------------------------------------------------

    pub fn open_save_dialog(&mut self) {
        self.builder_commit_input();
        self.save_dialog = Some(SaveDialog::default());
    }

    pub fn confirm_save_dialog(&mut self) {
        let Some(dialog) = self.save_dialog.take() else {
            return;
        };
        let name = dialog.name.trim().to_string();
        if name.is_empty() {
            self.add_notification(Notification::error(
                "Configuration needs a name".to_string(),
            ));
            return;
        }
        let Some(store) = &self.config_store else {
            self.add_notification(Notification::error(
                "No home directory; cannot save configurations".to_string(),
            ));
            return;
        };
        let config = SavedConfiguration::new(name.clone(), self.wizard.answers().clone());
        match store.save(&config) {
            Ok(_) => {
                self.add_notification(Notification::success(format!("Saved \"{name}\"")));
            }
            Err(e) => {
                self.add_notification(Notification::error(format!("Failed to save: {e}")));
            }
        }
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn cleanup_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// One main-loop iteration of background work: expire notices, advance
    /// the cosmetic progress bar, apply settled gateway calls, and spawn any
    /// queued request.
    pub fn tick(&mut self) {
        self.state.cleanup_expired_notifications();
        self.state.tick_storyboard_progress();
        self.state.drain_ai_outcomes();
        self.state.process_async_action();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// Include the test module inline
#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
