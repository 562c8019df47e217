//! Player-visible view of a session.
//!
//! A `Projection` borrows from the controller and is recomputed on demand;
//! it never mutates anything. It serializes so a surface across a process
//! boundary can consume it as JSON.

use serde::Serialize;
use smallvec::SmallVec;

use super::lifeline::Lifeline;
use super::state::{Phase, SessionState};
use crate::catalog::{AnswerKey, Question};
use crate::ladder::{LadderStep, PrizeLadder};

/// Availability of one lifeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LifelineStatus {
    pub kind: Lifeline,
    pub available: bool,
}

/// Everything a rendering surface needs to draw the current frame.
#[derive(Clone, Debug, Serialize)]
pub struct Projection<'a> {
    pub player_name: Option<&'a str>,
    pub phase: Phase,

    /// The question being asked. `None` before the name is entered and after
    /// the last question is won.
    pub current_question: Option<&'a Question>,

    pub hidden_answers: SmallVec<[AnswerKey; 2]>,
    pub used_lifelines: SmallVec<[Lifeline; 3]>,
    pub lifelines: [LifelineStatus; 3],
    pub ladder_highlight: Option<usize>,
    pub ladder: &'a [LadderStep],
}

impl<'a> Projection<'a> {
    pub(crate) fn new(state: &'a SessionState, question: Option<&'a Question>, ladder: &'a PrizeLadder) -> Self {
        let current_question = match state.phase() {
            Phase::Playing => question,
            Phase::NameEntry | Phase::Completed => None,
        };

        let used = state.used_lifelines();
        let lifelines = Lifeline::ALL.map(|kind| LifelineStatus {
            kind,
            available: used.is_available(kind),
        });

        Self {
            player_name: state.player_name(),
            phase: state.phase(),
            current_question,
            hidden_answers: state.hidden_answers().iter().copied().collect(),
            used_lifelines: used.to_vec(),
            lifelines,
            ladder_highlight: state.ladder_highlight(),
            ladder: ladder.steps(),
        }
    }

    #[must_use]
    pub fn is_hidden(&self, key: AnswerKey) -> bool {
        self.hidden_answers.contains(&key)
    }

    #[must_use]
    pub fn is_available(&self, kind: Lifeline) -> bool {
        !self.used_lifelines.contains(&kind)
    }

    /// Options of the current question that are still clickable.
    pub fn visible_options(&self) -> impl Iterator<Item = (AnswerKey, &'a str)> + '_ {
        self.current_question
            .into_iter()
            .flat_map(|q| q.options())
            .filter(move |(key, _)| !self.is_hidden(*key))
    }

    /// The highlighted rung, if play has started.
    #[must_use]
    pub fn highlighted_step(&self) -> Option<&'a LadderStep> {
        self.ladder_highlight.and_then(|rung| self.ladder.get(rung))
    }
}
