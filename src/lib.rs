//! # ladder-quiz
//!
//! Rules engine for a trivia prize-ladder quiz.
//!
//! A player enters a name, answers a fixed sequence of four-option
//! questions, climbs one rung of the prize ladder per correct answer, and may
//! spend each of three lifelines once.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: All mutable game state lives in a single
//!    `SessionState`, changed only by `SessionController`.
//!
//! 2. **Guards, Not Errors**: Intents that arrive in the wrong phase, reuse a
//!    lifeline, or pick a hidden answer are ignored and reported as
//!    `Step::Ignored`. Only load-time data problems are `Err`.
//!
//! 3. **Presentation Outside**: The controller emits `Signal`s and exposes a
//!    `Projection`; it never calls into rendering, audio, or alerts.
//!
//! 4. **Injected Randomness**: The 50/50 draw goes through `RandomSource`, so
//!    a seed or a scripted source makes it reproducible.
//!
//! ## Modules
//!
//! - `core`: RNG and session configuration
//! - `catalog`: Questions, answer keys, catalog loading
//! - `ladder`: Prize ladder rungs
//! - `session`: State, intents, lifelines, projection, controller
//! - `signals`: Outcome signals and listeners

pub mod core;
pub mod catalog;
pub mod ladder;
pub mod session;
pub mod signals;

// Re-export commonly used types
pub use crate::core::{QuizRng, RandomSource, SessionConfig};

pub use crate::catalog::{AnswerKey, CatalogError, Question, QuestionCatalog, QuestionRecord};

pub use crate::ladder::{LadderStep, PrizeLadder};

pub use crate::session::{
    GuardViolation, Intent, IntentRecord, Lifeline, Phase, Projection, SessionController,
    SessionState, Step,
};

pub use crate::signals::{Signal, SignalListener, SignalLog};
