// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::{state::View, AppState};
use crate::wizard::StepKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,

    // Editor input (routed to whichever editor the current view owns)
    InputChar(char),
    Backspace,
    Newline,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,

    // Landing actions
    StartBuilder,
    StartStoryboard,
    GenerateStory,

    // Builder navigation and AI actions
    BuilderNextStep,
    BuilderPrevStep,
    BuilderOptionUp,
    BuilderOptionDown,
    BuilderConfirmOption,
    BuilderRequestInspiration,
    BuilderRequestSuggestions,
    BuilderLocalExample,
    BuilderBack,

    // Suggestion popup
    SuggestionUp,
    SuggestionDown,
    SuggestionAccept,
    SuggestionDismiss,

    // Save-configuration dialog
    SaveDialogOpen,
    SaveDialogChar(char),
    SaveDialogBackspace,
    SaveDialogConfirm,
    SaveDialogCancel,

    // Storyboard actions
    StoryboardGenerate,
    StoryboardScrollUp,
    StoryboardScrollDown,
    StoryboardContinue,
    StoryboardBack,

    // Final stage
    EditorBack,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a raw key event into an app event for the current state.
    /// Returns `None` for keys that mean nothing right now.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Global chords first; plain characters belong to the editors.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = key.code {
                if let Some(event) = Self::handle_control_chord(c, state) {
                    return Some(event);
                }
            }
        }
        if key.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }
        if state.help_visible {
            // Any other key closes the overlay.
            return Some(AppEvent::ToggleHelp);
        }

        if state.save_dialog.is_some() {
            return Self::handle_save_dialog_key(key);
        }
        if state.suggestion_popup.is_some() {
            return Self::handle_suggestion_key(key);
        }

        match state.current_view {
            View::Landing => Self::handle_landing_key(key),
            View::Builder => Self::handle_builder_key(key, state),
            View::Storyboard => Self::handle_storyboard_key(key),
            View::VisualEditor => Self::handle_editor_key(key),
        }
    }

    fn handle_control_chord(c: char, state: &AppState) -> Option<AppEvent> {
        // AI help applies to free-text answers only; option lists are picked,
        // not written.
        let text_step = state.current_view == View::Builder
            && state.wizard.current_step().kind != StepKind::Select;
        match (c, &state.current_view) {
            ('q', _) => Some(AppEvent::Quit),
            ('b', View::Landing) => Some(AppEvent::StartBuilder),
            ('t', View::Landing) => Some(AppEvent::StartStoryboard),
            ('d', View::Landing) => Some(AppEvent::GenerateStory),
            ('n', View::Builder) => Some(AppEvent::BuilderNextStep),
            ('p', View::Builder) => Some(AppEvent::BuilderPrevStep),
            ('i', View::Builder) if text_step => Some(AppEvent::BuilderRequestInspiration),
            ('g', View::Builder) if text_step => Some(AppEvent::BuilderRequestSuggestions),
            ('e', View::Builder) => Some(AppEvent::BuilderLocalExample),
            ('o', View::Builder) => Some(AppEvent::SaveDialogOpen),
            ('g', View::Storyboard) => Some(AppEvent::StoryboardGenerate),
            ('e', View::Storyboard) => Some(AppEvent::StoryboardContinue),
            _ => None,
        }
    }

    fn handle_landing_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Enter => Some(AppEvent::Newline),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Down => Some(AppEvent::CursorDown),
            KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_builder_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let step_kind = state.wizard.current_step().kind;
        match key.code {
            KeyCode::Esc => Some(AppEvent::BuilderBack),
            KeyCode::Tab => Some(AppEvent::BuilderNextStep),
            KeyCode::BackTab => Some(AppEvent::BuilderPrevStep),
            // Select steps own the arrows and Enter
            KeyCode::Up if step_kind == StepKind::Select => Some(AppEvent::BuilderOptionUp),
            KeyCode::Down if step_kind == StepKind::Select => Some(AppEvent::BuilderOptionDown),
            KeyCode::Enter if step_kind == StepKind::Select => {
                Some(AppEvent::BuilderConfirmOption)
            }
            KeyCode::Char(c) if step_kind != StepKind::Select => Some(AppEvent::InputChar(c)),
            KeyCode::Backspace if step_kind != StepKind::Select => Some(AppEvent::Backspace),
            KeyCode::Enter => Some(AppEvent::Newline),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Down => Some(AppEvent::CursorDown),
            _ => None,
        }
    }

    fn handle_suggestion_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Up => Some(AppEvent::SuggestionUp),
            KeyCode::Down => Some(AppEvent::SuggestionDown),
            KeyCode::Enter => Some(AppEvent::SuggestionAccept),
            KeyCode::Esc => Some(AppEvent::SuggestionDismiss),
            _ => None,
        }
    }

    fn handle_save_dialog_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char(c) => Some(AppEvent::SaveDialogChar(c)),
            KeyCode::Backspace => Some(AppEvent::SaveDialogBackspace),
            KeyCode::Enter => Some(AppEvent::SaveDialogConfirm),
            KeyCode::Esc => Some(AppEvent::SaveDialogCancel),
            _ => None,
        }
    }

    fn handle_storyboard_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::StoryboardBack),
            KeyCode::PageUp => Some(AppEvent::StoryboardScrollUp),
            KeyCode::PageDown => Some(AppEvent::StoryboardScrollDown),
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Enter => Some(AppEvent::Newline),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Down => Some(AppEvent::CursorDown),
            _ => None,
        }
    }

    fn handle_editor_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::EditorBack),
            _ => None,
        }
    }

    /// Apply an app event to the state. All transitions are synchronous;
    /// gateway work is queued as an `AsyncAction` and spawned on the next
    /// tick.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,

            AppEvent::InputChar(c) => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.insert_char(c);
                }
            }
            AppEvent::Backspace => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.backspace();
                }
            }
            AppEvent::Newline => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.insert_newline();
                }
            }
            AppEvent::CursorLeft => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.move_cursor_left();
                }
            }
            AppEvent::CursorRight => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.move_cursor_right();
                }
            }
            AppEvent::CursorUp => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.move_cursor_up();
                }
            }
            AppEvent::CursorDown => {
                if let Some(editor) = Self::active_editor(state) {
                    editor.move_cursor_down();
                }
            }

            AppEvent::StartBuilder => state.start_builder(),
            AppEvent::StartStoryboard => state.start_storyboard(),
            AppEvent::GenerateStory => state.request_story(),

            AppEvent::BuilderNextStep => state.builder_advance(),
            AppEvent::BuilderPrevStep => state.builder_retreat(),
            AppEvent::BuilderOptionUp => state.builder_option_up(),
            AppEvent::BuilderOptionDown => state.builder_option_down(),
            AppEvent::BuilderConfirmOption => state.builder_confirm_option(),
            AppEvent::BuilderRequestInspiration => state.request_inspiration(),
            AppEvent::BuilderRequestSuggestions => state.request_suggestions(),
            AppEvent::BuilderLocalExample => state.builder_local_example(),
            AppEvent::BuilderBack => {
                state.builder_commit_input();
                state.suggestion_popup = None;
                state.current_view = View::Landing;
            }

            AppEvent::SuggestionUp => state.suggestion_up(),
            AppEvent::SuggestionDown => state.suggestion_down(),
            AppEvent::SuggestionAccept => state.accept_suggestion(),
            AppEvent::SuggestionDismiss => state.dismiss_suggestions(),

            AppEvent::SaveDialogOpen => state.open_save_dialog(),
            AppEvent::SaveDialogChar(c) => {
                if let Some(dialog) = state.save_dialog.as_mut() {
                    dialog.name.push(c);
                }
            }
            AppEvent::SaveDialogBackspace => {
                if let Some(dialog) = state.save_dialog.as_mut() {
                    dialog.name.pop();
                }
            }
            AppEvent::SaveDialogConfirm => state.confirm_save_dialog(),
            AppEvent::SaveDialogCancel => state.save_dialog = None,

            AppEvent::StoryboardGenerate => state.request_storyboard(),
            AppEvent::StoryboardScrollUp => {
                state.storyboard_scroll = state.storyboard_scroll.saturating_sub(1);
            }
            AppEvent::StoryboardScrollDown => {
                if state.storyboard_scroll + 1 < state.storyboard_shots.len() {
                    state.storyboard_scroll += 1;
                }
            }
            AppEvent::StoryboardContinue => state.current_view = View::VisualEditor,
            AppEvent::StoryboardBack => state.current_view = View::Landing,

            AppEvent::EditorBack => state.current_view = View::Landing,
        }
    }

    /// The editor the current view routes plain typing into.
    fn active_editor(state: &mut AppState) -> Option<&mut crate::app::state::TextEditor> {
        match state.current_view {
            View::Landing => Some(&mut state.landing_idea),
            View::Builder => {
                if state.wizard.current_step().kind == StepKind::Select {
                    None
                } else {
                    Some(&mut state.builder_input)
                }
            }
            View::Storyboard => {
                if state.storyboard_busy {
                    // Script is read-only while a request is in flight
                    None
                } else {
                    Some(&mut state.storyboard_script)
                }
            }
            View::VisualEditor => None,
        }
    }
}
