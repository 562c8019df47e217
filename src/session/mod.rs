//! Quiz session: state, intents, lifelines, and the controller that ties
//! them together.
//!
//! ## Phases
//!
//! ```text
//! NameEntry --submit_name(valid)--> Playing
//! Playing --submit_answer(correct, not last)--> Playing (index + 1)
//! Playing --submit_answer(correct, last)--> Completed
//! Playing --submit_answer(incorrect)--> Playing (unchanged)
//! Playing --activate_lifeline--> Playing (used set grows)
//! ```
//!
//! `Playing` is the only phase that accepts answers or lifelines, and
//! `Completed` accepts nothing.

pub mod controller;
pub mod intent;
pub mod lifeline;
pub mod projection;
pub mod state;

pub use controller::{GuardViolation, SessionController, Step};
pub use intent::{Intent, IntentRecord};
pub use lifeline::{Lifeline, UsedLifelines};
pub use projection::{LifelineStatus, Projection};
pub use state::{Phase, SessionState};
