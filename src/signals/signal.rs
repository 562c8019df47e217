use serde::{Deserialize, Serialize};

/// Advisory outcome of an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// The submitted answer was right.
    Correct,
    /// The submitted answer was wrong; the player may try again.
    Incorrect,
    /// The last question was answered correctly.
    GameWon,
}

impl Signal {
    /// Default message a surface can show for this signal.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Signal::Correct => "Correct!",
            Signal::Incorrect => "Sorry, that's not correct. Try again.",
            Signal::GameWon => "Congrats! You've answered all questions.",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
