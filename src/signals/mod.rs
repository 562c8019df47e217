//! Outcome signals and their subscribers.
//!
//! The controller decides; listeners react. A signal carries no state and
//! must not drive game logic: it exists so a rendering surface can play a
//! sound or show a message after the state has already changed.
//!
//! ## Components
//!
//! - `Signal`: Correct, Incorrect, GameWon
//! - `SignalListener`: subscriber seam, notified after each applied intent
//! - `SignalLog`: listener that keeps every signal it sees

mod listener;
mod signal;

pub use listener::{SignalListener, SignalLog};
pub use signal::Signal;
