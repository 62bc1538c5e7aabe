// ABOUTME: Wizard session controller driving the fixed question sequence
// ABOUTME: Holds the current step index and the accumulated answer record

pub mod catalog;

pub use catalog::{Step, StepKind, CATALOG};

use std::collections::HashMap;

/// Result of asking the session to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    Moved,
    /// Already on the last step; the session is complete and control should
    /// pass to the next stage instead of incrementing the index.
    Complete,
}

/// One wizard traversal: current position plus the answers collected so far.
///
/// All operations are pure in-memory state transitions; nothing here can
/// fail. The answer record lives only as long as the session unless the user
/// explicitly saves it as a named configuration.
#[derive(Debug, Clone)]
pub struct WizardSession {
    steps: &'static [Step],
    index: usize,
    answers: HashMap<String, String>,
}

impl WizardSession {
    /// Start a fresh session over the built-in catalog, prefilled with the
    /// catalog's default answers.
    pub fn new() -> Self {
        Self::with_steps(CATALOG)
    }

    /// Start a session over an explicit catalog. An empty catalog is a
    /// configuration error; constructing one panics rather than limping on.
    pub fn with_steps(steps: &'static [Step]) -> Self {
        assert!(!steps.is_empty(), "wizard catalog must not be empty");
        let answers = steps
            .iter()
            .filter(|s| !s.default_answer.is_empty())
            .map(|s| (s.id.to_string(), s.default_answer.to_string()))
            .collect();
        Self {
            steps,
            index: 0,
            answers,
        }
    }

    /// Seed the session with an initial idea, stored under the first
    /// (script) step the way the original flow passed it in.
    pub fn with_seed_idea(idea: &str) -> Self {
        let mut session = Self::new();
        if !idea.is_empty() {
            session.answers.insert("scriptText".to_string(), idea.to_string());
        }
        session
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The step at the current index. The index invariant keeps this total.
    pub fn current_step(&self) -> &Step {
        &self.steps[self.index]
    }

    pub fn is_last_step(&self) -> bool {
        self.index == self.steps.len() - 1
    }

    /// Store `value` under the current step's identifier, overwriting any
    /// prior answer. No validation; empty strings are accepted.
    pub fn record_answer(&mut self, value: impl Into<String>) {
        let id = self.current_step().id.to_string();
        self.answers.insert(id, value.into());
    }

    /// The answer recorded for the current step, if any.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(self.current_step().id).map(String::as_str)
    }

    /// The answer recorded for an arbitrary step identifier.
    pub fn answer(&self, step_id: &str) -> Option<&str> {
        self.answers.get(step_id).map(String::as_str)
    }

    /// Move forward one step, or signal completion from the last step.
    pub fn advance(&mut self) -> Advance {
        if self.index < self.steps.len() - 1 {
            self.index += 1;
            Advance::Moved
        } else {
            Advance::Complete
        }
    }

    /// Move back one step; no-op at the first step.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Exact completion fraction, in (0, 1].
    pub fn progress_fraction(&self) -> f64 {
        (self.index + 1) as f64 / self.steps.len() as f64
    }

    /// Completion percentage rounded for display.
    pub fn progress_percent(&self) -> u16 {
        (self.progress_fraction() * 100.0).round() as u16
    }

    /// Borrow the full answer record, e.g. for saving or summarizing.
    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    /// Replace the answer record wholesale, e.g. when loading a saved
    /// configuration. The index is reset to the first step.
    pub fn restore_answers(&mut self, answers: HashMap<String, String>) {
        self.answers = answers;
        self.index = 0;
    }

    /// Scene context string handed to the gateway with suggestion requests.
    pub fn scene_context(&self) -> String {
        format!(
            "Scene: {}",
            self.answer("sceneCore").filter(|s| !s.is_empty()).unwrap_or("Not specified")
        )
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_increments_below_last_step() {
        let mut session = WizardSession::new();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.advance(), Advance::Moved);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn advance_on_last_step_signals_completion() {
        let mut session = WizardSession::new();
        for _ in 0..session.step_count() - 1 {
            assert_eq!(session.advance(), Advance::Moved);
        }
        assert!(session.is_last_step());
        let last = session.current_index();
        assert_eq!(session.advance(), Advance::Complete);
        // Completion never pushes the index out of range.
        assert_eq!(session.current_index(), last);
    }

    #[test]
    fn retreat_is_a_no_op_at_the_first_step() {
        let mut session = WizardSession::new();
        session.retreat();
        assert_eq!(session.current_index(), 0);

        session.advance();
        session.retreat();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn progress_fraction_is_exact() {
        let mut session = WizardSession::new();
        let n = session.step_count();
        assert_eq!(n, 12);
        assert!((session.progress_fraction() - 1.0 / 12.0).abs() < f64::EPSILON);
        assert_eq!(session.progress_percent(), 8);

        for _ in 0..n - 1 {
            session.advance();
        }
        assert!((session.progress_fraction() - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn record_answer_round_trips_and_overwrites() {
        let mut session = WizardSession::new();
        session.record_answer("first draft");
        assert_eq!(session.current_answer(), Some("first draft"));
        session.record_answer("second draft");
        assert_eq!(session.current_answer(), Some("second draft"));
    }

    #[test]
    fn answers_survive_retreat() {
        let mut session = WizardSession::new();
        session.record_answer("rain combs the window");
        session.advance();
        session.record_answer("a man edits reels of his past");
        session.advance();
        assert_eq!(session.current_step().id, "emotion");

        session.retreat();
        assert_eq!(session.current_step().id, "sceneCore");
        assert_eq!(session.current_answer(), Some("a man edits reels of his past"));
    }

    #[test]
    fn defaults_prefill_the_answer_record() {
        let session = WizardSession::new();
        assert_eq!(session.answer("numberOfShots"), Some("3"));
        assert_eq!(session.answer("cameraType"), Some("Arri Alexa 65"));
        assert_eq!(session.answer("sceneCore"), None);
    }

    #[test]
    fn seed_idea_lands_in_the_script_step() {
        let session = WizardSession::with_seed_idea("two siblings on a motel balcony");
        assert_eq!(session.answer("scriptText"), Some("two siblings on a motel balcony"));

        let empty = WizardSession::with_seed_idea("");
        assert_eq!(empty.answer("scriptText"), None);
    }

    #[test]
    fn scene_context_falls_back_when_unset() {
        let mut session = WizardSession::new();
        assert_eq!(session.scene_context(), "Scene: Not specified");
        session.advance();
        session.record_answer("a station bathed in crimson departures");
        assert_eq!(
            session.scene_context(),
            "Scene: a station bathed in crimson departures"
        );
    }
}
