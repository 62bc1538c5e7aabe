// ABOUTME: Integration tests mapping keyboard input to app actions across views

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dreamer::app::state::{SuggestionPopup, TextEditor};
use dreamer::app::{AppEvent, AppState, EventHandler, View};
use pretty_assertions::assert_eq;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn fresh_state() -> AppState {
    let mut state = AppState::new();
    // Key routing must not depend on whether a gateway is configured.
    state.gemini = None;
    state
}

#[test]
fn ctrl_q_quits_from_any_view() {
    let mut state = fresh_state();
    for view in [View::Landing, View::Builder, View::Storyboard, View::VisualEditor] {
        state.current_view = view;
        let event = EventHandler::handle_key_event(ctrl('q'), &state);
        assert_eq!(event, Some(AppEvent::Quit));
    }

    EventHandler::process_event(AppEvent::Quit, &mut state);
    assert!(state.should_quit);
}

#[test]
fn typing_on_landing_goes_into_the_idea_editor() {
    let mut state = fresh_state();
    for c in "rainy attic".chars() {
        if let Some(event) = EventHandler::handle_key_event(key(KeyCode::Char(c)), &state) {
            EventHandler::process_event(event, &mut state);
        }
    }
    assert_eq!(state.landing_idea.text(), "rainy attic");
}

#[test]
fn landing_chords_open_the_flows() {
    let mut state = fresh_state();
    state.landing_idea = TextEditor::from_string("neon motel at dusk");

    let event = EventHandler::handle_key_event(ctrl('b'), &state);
    assert_eq!(event, Some(AppEvent::StartBuilder));
    EventHandler::process_event(AppEvent::StartBuilder, &mut state);
    assert_eq!(state.current_view, View::Builder);
    assert_eq!(state.wizard.answer("scriptText"), Some("neon motel at dusk"));

    let mut state = fresh_state();
    state.landing_idea = TextEditor::from_string("neon motel at dusk");
    EventHandler::process_event(AppEvent::StartStoryboard, &mut state);
    assert_eq!(state.current_view, View::Storyboard);
    assert_eq!(state.storyboard_script.text(), "neon motel at dusk");
}

#[test]
fn builder_keys_route_by_step_kind() {
    let mut state = fresh_state();
    state.start_builder();
    // Step 0 is the script step; plain typing edits the input.
    let event = EventHandler::handle_key_event(key(KeyCode::Char('x')), &state);
    assert_eq!(event, Some(AppEvent::InputChar('x')));

    // Move to the emotion select step; arrows navigate options instead.
    EventHandler::process_event(AppEvent::BuilderNextStep, &mut state);
    EventHandler::process_event(AppEvent::BuilderNextStep, &mut state);
    assert_eq!(state.wizard.current_step().id, "emotion");
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Down), &state),
        Some(AppEvent::BuilderOptionDown)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Enter), &state),
        Some(AppEvent::BuilderConfirmOption)
    );
    // Plain characters mean nothing on a select step.
    assert_eq!(EventHandler::handle_key_event(key(KeyCode::Char('x')), &state), None);
}

#[test]
fn ai_help_chords_only_work_on_text_steps() {
    let mut state = fresh_state();
    state.start_builder();
    // Script step: both chords are live.
    assert_eq!(
        EventHandler::handle_key_event(ctrl('i'), &state),
        Some(AppEvent::BuilderRequestInspiration)
    );
    assert_eq!(
        EventHandler::handle_key_event(ctrl('g'), &state),
        Some(AppEvent::BuilderRequestSuggestions)
    );

    // Emotion is a select step; the chords fall through to nothing.
    EventHandler::process_event(AppEvent::BuilderNextStep, &mut state);
    EventHandler::process_event(AppEvent::BuilderNextStep, &mut state);
    assert_eq!(state.wizard.current_step().id, "emotion");
    assert_eq!(EventHandler::handle_key_event(ctrl('i'), &state), None);
    assert_eq!(EventHandler::handle_key_event(ctrl('g'), &state), None);
}

#[test]
fn suggestion_popup_intercepts_keys() {
    let mut state = fresh_state();
    state.start_builder();
    state.suggestion_popup = Some(SuggestionPopup {
        items: vec!["a candlelit attic".to_string(), "a drowned pier".to_string()],
        selected: 0,
    });

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Down), &state),
        Some(AppEvent::SuggestionDown)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &state),
        Some(AppEvent::SuggestionDismiss)
    );

    EventHandler::process_event(AppEvent::SuggestionDown, &mut state);
    EventHandler::process_event(AppEvent::SuggestionAccept, &mut state);
    assert!(state.suggestion_popup.is_none());
    assert_eq!(state.wizard.current_answer(), Some("a drowned pier"));
}

#[test]
fn save_dialog_collects_a_name() {
    let mut state = fresh_state();
    state.start_builder();
    EventHandler::process_event(AppEvent::SaveDialogOpen, &mut state);
    assert!(state.save_dialog.is_some());

    for c in "noir".chars() {
        let event = EventHandler::handle_key_event(key(KeyCode::Char(c)), &state);
        assert_eq!(event, Some(AppEvent::SaveDialogChar(c)));
        if let Some(event) = event {
            EventHandler::process_event(event, &mut state);
        }
    }
    assert_eq!(state.save_dialog.as_ref().map(|d| d.name.as_str()), Some("noir"));

    EventHandler::process_event(AppEvent::SaveDialogCancel, &mut state);
    assert!(state.save_dialog.is_none());
}

#[test]
fn escape_walks_back_to_the_landing_view() {
    let mut state = fresh_state();
    state.start_builder();
    state.builder_input = TextEditor::from_string("kept on exit");

    let event = EventHandler::handle_key_event(key(KeyCode::Esc), &state);
    assert_eq!(event, Some(AppEvent::BuilderBack));
    EventHandler::process_event(AppEvent::BuilderBack, &mut state);
    assert_eq!(state.current_view, View::Landing);
    // Leaving the builder still commits the in-progress answer.
    assert_eq!(state.wizard.answer("scriptText"), Some("kept on exit"));

    state.current_view = View::Storyboard;
    EventHandler::process_event(AppEvent::StoryboardBack, &mut state);
    assert_eq!(state.current_view, View::Landing);
}

#[test]
fn storyboard_script_is_read_only_while_busy() {
    let mut state = fresh_state();
    state.start_storyboard();
    state.storyboard_script = TextEditor::from_string("INT. PIER - DUSK");
    state.storyboard_busy = true;

    EventHandler::process_event(AppEvent::InputChar('z'), &mut state);
    assert_eq!(state.storyboard_script.text(), "INT. PIER - DUSK");

    state.storyboard_busy = false;
    EventHandler::process_event(AppEvent::InputChar('!'), &mut state);
    assert_eq!(state.storyboard_script.text(), "INT. PIER - DUSK!");
}

#[test]
fn storyboard_scroll_stays_in_bounds() {
    let mut state = fresh_state();
    state.current_view = View::Storyboard;

    EventHandler::process_event(AppEvent::StoryboardScrollDown, &mut state);
    assert_eq!(state.storyboard_scroll, 0);
    EventHandler::process_event(AppEvent::StoryboardScrollUp, &mut state);
    assert_eq!(state.storyboard_scroll, 0);
}

#[test]
fn help_overlay_toggles_and_swallows_keys() {
    let mut state = fresh_state();
    let event = EventHandler::handle_key_event(key(KeyCode::F(1)), &state);
    assert_eq!(event, Some(AppEvent::ToggleHelp));
    EventHandler::process_event(AppEvent::ToggleHelp, &mut state);
    assert!(state.help_visible);

    // Any key closes the overlay instead of reaching the view.
    let event = EventHandler::handle_key_event(key(KeyCode::Char('a')), &state);
    assert_eq!(event, Some(AppEvent::ToggleHelp));
}
