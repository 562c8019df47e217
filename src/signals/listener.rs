use std::cell::RefCell;
use std::rc::Rc;

use super::signal::Signal;
use crate::session::Projection;

/// Subscriber for outcome signals.
///
/// Called once per signal, in emission order, after the state change that
/// produced it. `view` is the projection as of that moment.
pub trait SignalListener {
    fn on_signal(&mut self, signal: Signal, view: &Projection<'_>);
}

/// Listener that records every signal.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the controller.
///
/// ```
/// use ladder_quiz::signals::{Signal, SignalLog};
///
/// let log = SignalLog::new();
/// assert!(log.signals().is_empty());
/// assert_eq!(log.count(Signal::Correct), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SignalLog {
    seen: Rc<RefCell<Vec<Signal>>>,
}

impl SignalLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All signals received so far.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal> {
        self.seen.borrow().clone()
    }

    #[must_use]
    pub fn count(&self, signal: Signal) -> usize {
        self.seen.borrow().iter().filter(|&&s| s == signal).count()
    }

    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }
}

impl SignalListener for SignalLog {
    fn on_signal(&mut self, signal: Signal, _view: &Projection<'_>) {
        self.seen.borrow_mut().push(signal);
    }
}
