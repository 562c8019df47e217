//! Session state: the single mutable record of a game in progress.
//!
//! Only `SessionController` mutates this; everything else reads it through
//! accessors or a `Projection`. Mutators are crate-private and each one keeps
//! its own invariant:
//!
//! - the question index only moves forward, one step at a time
//! - the ladder highlight follows the index, capped at the top rung
//! - spent lifelines are never returned
//! - hidden answers are cleared on every advance
//!
//! History uses `im::Vector` so cloning a state for a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::intent::{Intent, IntentRecord};
use super::lifeline::{Lifeline, UsedLifelines};
use crate::catalog::AnswerKey;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's name.
    #[default]
    NameEntry,
    /// Answering questions.
    Playing,
    /// Every question answered; terminal.
    Completed,
}

/// Mutable state of one quiz session.
///
/// Serializes for inspection; there is no way to load one back.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SessionState {
    player_name: Option<String>,
    phase: Phase,
    current_question: usize,
    ladder_highlight: Option<usize>,
    used_lifelines: UsedLifelines,
    hidden_answers: SmallVec<[AnswerKey; 2]>,
    history: Vector<IntentRecord>,
}

impl SessionState {
    /// Fresh state: name entry, first question, nothing spent or hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question
    }

    #[must_use]
    pub fn ladder_highlight(&self) -> Option<usize> {
        self.ladder_highlight
    }

    #[must_use]
    pub fn used_lifelines(&self) -> &UsedLifelines {
        &self.used_lifelines
    }

    #[must_use]
    pub fn hidden_answers(&self) -> &[AnswerKey] {
        &self.hidden_answers
    }

    #[must_use]
    pub fn is_hidden(&self, key: AnswerKey) -> bool {
        self.hidden_answers.contains(&key)
    }

    /// Accepted intents in order.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    // === Transitions ===

    /// Record the player's name and start play on the lowest rung.
    pub(crate) fn start(&mut self, name: String) {
        self.player_name = Some(name);
        self.phase = Phase::Playing;
        self.ladder_highlight = Some(0);
    }

    /// Move to the next question, climbing one rung up to `max_rung`.
    pub(crate) fn advance(&mut self, max_rung: usize) {
        self.current_question += 1;
        self.ladder_highlight = self.ladder_highlight.map(|rung| (rung + 1).min(max_rung));
        self.hidden_answers.clear();
    }

    /// Finish the session after the last correct answer.
    pub(crate) fn complete(&mut self) {
        self.phase = Phase::Completed;
        self.hidden_answers.clear();
    }

    /// Spend a lifeline. Returns false if it was already spent.
    pub(crate) fn spend_lifeline(&mut self, kind: Lifeline) -> bool {
        self.used_lifelines.spend(kind)
    }

    pub(crate) fn hide_answers(&mut self, keys: impl IntoIterator<Item = AnswerKey>) {
        self.hidden_answers = keys.into_iter().collect();
        self.hidden_answers.sort_unstable();
    }

    pub(crate) fn record(&mut self, intent: Intent) {
        let sequence = self.history.len();
        self.history
            .push_back(IntentRecord::new(sequence, self.current_question, intent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = SessionState::new();

        assert_eq!(state.phase(), Phase::NameEntry);
        assert_eq!(state.player_name(), None);
        assert_eq!(state.current_question_index(), 0);
        assert_eq!(state.ladder_highlight(), None);
        assert!(state.used_lifelines().is_empty());
        assert!(state.hidden_answers().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_start() {
        let mut state = SessionState::new();
        state.start("Alex".into());

        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.player_name(), Some("Alex"));
        assert_eq!(state.ladder_highlight(), Some(0));
    }

    #[test]
    fn test_advance_clears_hidden_and_caps_highlight() {
        let mut state = SessionState::new();
        state.start("Alex".into());
        state.hide_answers([AnswerKey::A4, AnswerKey::A1]);
        assert_eq!(state.hidden_answers(), &[AnswerKey::A1, AnswerKey::A4]);

        state.advance(1);
        assert_eq!(state.current_question_index(), 1);
        assert_eq!(state.ladder_highlight(), Some(1));
        assert!(state.hidden_answers().is_empty());

        state.advance(1);
        assert_eq!(state.current_question_index(), 2);
        assert_eq!(state.ladder_highlight(), Some(1)); // Capped
    }

    #[test]
    fn test_record_history() {
        let mut state = SessionState::new();
        state.record(Intent::SubmitName("Sam".into()));
        state.start("Sam".into());
        state.advance(13);
        state.record(Intent::SubmitAnswer(AnswerKey::A2));

        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[0].sequence, 0);
        assert_eq!(state.history()[1].sequence, 1);
        assert_eq!(state.history()[1].question_index, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = SessionState::new();
        state.start("Alex".into());
        let snapshot = state.clone();

        state.spend_lifeline(Lifeline::AudiencePoll);
        state.record(Intent::ActivateLifeline(Lifeline::AudiencePoll));

        assert!(snapshot.used_lifelines().is_empty());
        assert!(snapshot.history().is_empty());
        assert_eq!(state.history().len(), 1);
    }
}
