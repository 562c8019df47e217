//! The session controller: the only thing that mutates a `SessionState`.
//!
//! Every operation is guarded. A call that violates its precondition leaves
//! the state untouched and returns `Step::Ignored` with the reason; it is
//! never an `Err` and never panics.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info};

use super::intent::Intent;
use super::lifeline::Lifeline;
use super::projection::Projection;
use super::state::{Phase, SessionState};
use crate::catalog::{AnswerKey, CatalogError, Question, QuestionCatalog};
use crate::core::rng::{sample_k_of_n, QuizRng, RandomSource};
use crate::ladder::PrizeLadder;
use crate::signals::{Signal, SignalListener};

/// Number of incorrect options the 50/50 lifeline removes.
const FIFTY_FIFTY_HIDES: usize = 2;

/// Why an intent was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GuardViolation {
    #[error("intent not accepted in phase {actual:?}, expected {expected:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("player name is blank")]
    InvalidName,

    #[error("lifeline {0} already used")]
    LifelineUsed(Lifeline),

    #[error("answer {0} is hidden")]
    AnswerHidden(AnswerKey),
}

/// Result of handing an intent to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// State changed (or an incorrect answer was judged); `signals` were emitted.
    Applied { signals: SmallVec<[Signal; 2]> },
    /// Precondition failed; nothing changed.
    Ignored(GuardViolation),
}

impl Step {
    fn applied(signals: &[Signal]) -> Self {
        Step::Applied {
            signals: SmallVec::from_slice(signals),
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Step::Applied { .. })
    }

    /// Signals emitted by this step (empty when ignored).
    #[must_use]
    pub fn signals(&self) -> &[Signal] {
        match self {
            Step::Applied { signals } => signals,
            Step::Ignored(_) => &[],
        }
    }

    #[must_use]
    pub fn violation(&self) -> Option<GuardViolation> {
        match self {
            Step::Applied { .. } => None,
            Step::Ignored(v) => Some(*v),
        }
    }
}

/// Owns one quiz session and applies player intents to it.
///
/// ## Example
///
/// ```
/// use ladder_quiz::catalog::{AnswerKey, QuestionCatalog};
/// use ladder_quiz::core::QuizRng;
/// use ladder_quiz::ladder::PrizeLadder;
/// use ladder_quiz::session::{Phase, SessionController};
/// use ladder_quiz::signals::Signal;
///
/// let catalog = QuestionCatalog::from_json(
///     r#"[{"q": "2 + 2?", "a1": "3", "a2": "4", "a3": "5", "a4": "6", "correct": "a2"}]"#,
/// ).unwrap();
/// let mut session =
///     SessionController::with_source(catalog, PrizeLadder::classic(), QuizRng::new(7)).unwrap();
///
/// assert!(session.submit_name("Alex").is_applied());
/// let step = session.submit_answer(AnswerKey::A2);
/// assert_eq!(step.signals(), &[Signal::Correct, Signal::GameWon]);
/// assert_eq!(session.projection().phase, Phase::Completed);
/// ```
pub struct SessionController<R = QuizRng> {
    catalog: QuestionCatalog,
    ladder: PrizeLadder,
    state: SessionState,
    rng: R,
    listeners: Vec<Box<dyn SignalListener>>,
}

impl SessionController<QuizRng> {
    /// Session over `catalog` with the classic ladder and an entropy-seeded RNG.
    pub fn new(catalog: QuestionCatalog) -> Result<Self, CatalogError> {
        Self::with_source(catalog, PrizeLadder::classic(), QuizRng::from_entropy())
    }
}

impl<R: RandomSource> SessionController<R> {
    /// Session with an explicit ladder and random source.
    ///
    /// Fails if the ladder has fewer rungs than the catalog has questions.
    pub fn with_source(catalog: QuestionCatalog, ladder: PrizeLadder, rng: R) -> Result<Self, CatalogError> {
        ladder.check_covers(catalog.len())?;
        Ok(Self {
            catalog,
            ladder,
            state: SessionState::new(),
            rng,
            listeners: Vec::new(),
        })
    }

    /// Register a listener for outcome signals.
    pub fn subscribe(&mut self, listener: impl SignalListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Reads ===

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn ladder(&self) -> &PrizeLadder {
        &self.ladder
    }

    /// The question currently being asked, if playing.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state.phase() {
            Phase::Playing => self.catalog.get(self.state.current_question_index()),
            Phase::NameEntry | Phase::Completed => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase() == Phase::Completed
    }

    /// Player-visible view of the session. Pure read.
    #[must_use]
    pub fn projection(&self) -> Projection<'_> {
        Projection::new(
            &self.state,
            self.catalog.get(self.state.current_question_index()),
            &self.ladder,
        )
    }

    // === Intents ===

    /// Apply any intent.
    pub fn dispatch(&mut self, intent: Intent) -> Step {
        match intent {
            Intent::SubmitName(name) => self.submit_name(name),
            Intent::ActivateLifeline(kind) => self.activate_lifeline(kind),
            Intent::SubmitAnswer(key) => self.submit_answer(key),
        }
    }

    /// Apply a sequence of intents in order.
    pub fn replay(&mut self, intents: impl IntoIterator<Item = Intent>) -> Vec<Step> {
        intents.into_iter().map(|intent| self.dispatch(intent)).collect()
    }

    /// Confirm the player's name and start play.
    ///
    /// Names that are empty or only whitespace are refused.
    pub fn submit_name(&mut self, name: impl Into<String>) -> Step {
        if let Err(violation) = self.require_phase(Phase::NameEntry) {
            return ignore(violation);
        }

        let name = name.into();
        if name.trim().is_empty() {
            return ignore(GuardViolation::InvalidName);
        }

        info!(player = %name, questions = self.catalog.len(), "session started");
        self.state.record(Intent::SubmitName(name.clone()));
        self.state.start(name);
        Step::applied(&[])
    }

    /// Spend a lifeline on the current question.
    pub fn activate_lifeline(&mut self, kind: Lifeline) -> Step {
        if let Err(violation) = self.require_phase(Phase::Playing) {
            return ignore(violation);
        }
        if self.state.used_lifelines().contains(kind) {
            return ignore(GuardViolation::LifelineUsed(kind));
        }

        let index = self.state.current_question_index();
        self.state.record(Intent::ActivateLifeline(kind));
        self.state.spend_lifeline(kind);

        if kind == Lifeline::FiftyFifty {
            if let Some(question) = self.catalog.get(index) {
                let hidden = sample_k_of_n(&mut self.rng, &question.incorrect_keys(), FIFTY_FIFTY_HIDES);
                debug!(question = index, hidden = ?hidden.as_slice(), "50/50 applied");
                self.state.hide_answers(hidden);
            }
        } else {
            debug!(question = index, lifeline = %kind, "lifeline used");
        }

        Step::applied(&[])
    }

    /// Judge an answer to the current question.
    ///
    /// Hidden options are inert. A wrong answer changes nothing and may be
    /// retried without limit.
    pub fn submit_answer(&mut self, key: AnswerKey) -> Step {
        if let Err(violation) = self.require_phase(Phase::Playing) {
            return ignore(violation);
        }
        if self.state.is_hidden(key) {
            return ignore(GuardViolation::AnswerHidden(key));
        }

        let index = self.state.current_question_index();
        let Some(correct) = self.catalog.get(index).map(|q| q.correct) else {
            return ignore(GuardViolation::WrongPhase {
                expected: Phase::Playing,
                actual: Phase::Completed,
            });
        };

        self.state.record(Intent::SubmitAnswer(key));

        let mut signals: SmallVec<[Signal; 2]> = SmallVec::new();
        if key == correct {
            signals.push(Signal::Correct);
            if index == self.catalog.last_index() {
                self.state.complete();
                signals.push(Signal::GameWon);
                info!(player = ?self.state.player_name(), "all questions answered");
            } else {
                self.state.advance(self.ladder.max_rung());
                debug!(question = index, %key, "correct answer");
            }
        } else {
            signals.push(Signal::Incorrect);
            debug!(question = index, %key, "incorrect answer");
        }

        self.notify(&signals);
        Step::Applied { signals }
    }

    fn require_phase(&self, expected: Phase) -> Result<(), GuardViolation> {
        let actual = self.state.phase();
        if actual == expected {
            Ok(())
        } else {
            Err(GuardViolation::WrongPhase { expected, actual })
        }
    }

    fn notify(&mut self, signals: &[Signal]) {
        if self.listeners.is_empty() {
            return;
        }

        let view = Projection::new(
            &self.state,
            self.catalog.get(self.state.current_question_index()),
            &self.ladder,
        );
        for &signal in signals {
            for listener in &mut self.listeners {
                listener.on_signal(signal, &view);
            }
        }
    }
}

fn ignore(violation: GuardViolation) -> Step {
    debug!(%violation, "intent ignored");
    Step::Ignored(violation)
}
