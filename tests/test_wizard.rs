// ABOUTME: Integration tests for a full wizard traversal and snapshot restore

use dreamer::models::SavedConfiguration;
use dreamer::wizard::{Advance, StepKind, WizardSession, CATALOG};
use pretty_assertions::assert_eq;

#[test]
fn a_full_traversal_yields_a_complete_answer_record() {
    let mut session = WizardSession::with_seed_idea("He edits reels of his past.");
    let mut last_percent = 0;

    loop {
        let step = session.current_step();
        let (kind, id, first_option) = (step.kind, step.id, step.options.first().copied());
        match kind {
            StepKind::Select => {
                // Take the first option, standing in for a user choice.
                let choice = first_option.map(ToString::to_string).unwrap_or_default();
                session.record_answer(choice);
            }
            StepKind::Text | StepKind::Script => {
                if session.current_answer().is_none() {
                    session.record_answer(format!("answer for {id}"));
                }
            }
        }

        // Progress only ever moves forward.
        let percent = session.progress_percent();
        assert!(percent >= last_percent);
        last_percent = percent;

        if session.advance() == Advance::Complete {
            break;
        }
    }

    assert_eq!(last_percent, 100);
    for step in CATALOG {
        assert!(
            session.answer(step.id).is_some(),
            "missing answer for {}",
            step.id
        );
    }
}

#[test]
fn defaults_survive_a_traversal_untouched() {
    let mut session = WizardSession::new();
    for _ in 0..session.step_count() {
        session.advance();
    }
    // Nothing was typed, so the catalog defaults are the whole record.
    assert_eq!(session.answer("cameraType"), Some("Arri Alexa 65"));
    assert_eq!(session.answer("filmStock"), Some("Kodak Vision3 500T 5219"));
    assert_eq!(session.answer("colorGrading"), Some("teal-orange tension"));
    assert_eq!(session.answer("sceneCore"), None);
}

#[test]
fn a_saved_snapshot_restores_into_a_new_session() {
    let mut original = WizardSession::new();
    original.record_answer("INT. ATTIC - NIGHT");
    original.advance();
    original.record_answer("a woman reading farewell letters");

    let snapshot = SavedConfiguration::new("attic study".to_string(), original.answers().clone());

    let mut restored = WizardSession::new();
    restored.restore_answers(snapshot.answers.clone());

    assert_eq!(restored.current_index(), 0);
    assert_eq!(restored.answer("scriptText"), Some("INT. ATTIC - NIGHT"));
    assert_eq!(restored.answer("sceneCore"), Some("a woman reading farewell letters"));
    // Defaults captured at save time come back with the snapshot.
    assert_eq!(restored.answer("numberOfShots"), Some("3"));
}
