//! Question records and answer keys.
//!
//! The catalog wire format names options `a1..a4` and designates the correct
//! one by key, so `AnswerKey` serializes to exactly those strings.

use serde::{Deserialize, Serialize};

/// One of the four option slots of a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    A1,
    A2,
    A3,
    A4,
}

impl AnswerKey {
    /// All keys in display order.
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A1, AnswerKey::A2, AnswerKey::A3, AnswerKey::A4];

    /// Position of this key within `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            AnswerKey::A1 => 0,
            AnswerKey::A2 => 1,
            AnswerKey::A3 => 2,
            AnswerKey::A4 => 3,
        }
    }

    /// The wire name (`"a1"` .. `"a4"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AnswerKey::A1 => "a1",
            AnswerKey::A2 => "a2",
            AnswerKey::A3 => "a3",
            AnswerKey::A4 => "a4",
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry as it appears in `questions.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub q: String,
    pub a1: String,
    pub a2: String,
    pub a3: String,
    pub a4: String,
    pub correct: AnswerKey,
}

/// An immutable question at a fixed position in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Ordinal position, contiguous from 0.
    pub index: usize,

    /// Prompt text.
    pub prompt: String,

    /// Option texts, indexed by `AnswerKey::index`.
    options: [String; 4],

    /// The single correct key.
    pub correct: AnswerKey,
}

impl Question {
    /// Create a question from its parts.
    pub fn new(index: usize, prompt: impl Into<String>, options: [String; 4], correct: AnswerKey) -> Self {
        Self {
            index,
            prompt: prompt.into(),
            options,
            correct,
        }
    }

    /// Build a question from a wire record placed at `index`.
    #[must_use]
    pub fn from_record(index: usize, record: QuestionRecord) -> Self {
        Self {
            index,
            prompt: record.q,
            options: [record.a1, record.a2, record.a3, record.a4],
            correct: record.correct,
        }
    }

    /// Text of the option under `key`.
    #[must_use]
    pub fn option(&self, key: AnswerKey) -> &str {
        &self.options[key.index()]
    }

    /// Iterate `(key, text)` pairs in display order.
    pub fn options(&self) -> impl Iterator<Item = (AnswerKey, &str)> {
        AnswerKey::ALL.into_iter().map(move |key| (key, self.option(key)))
    }

    /// Check whether `key` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, key: AnswerKey) -> bool {
        self.correct == key
    }

    /// The three keys that are not correct, in display order.
    #[must_use]
    pub fn incorrect_keys(&self) -> [AnswerKey; 3] {
        let mut out = [AnswerKey::A1; 3];
        let mut n = 0;
        for key in AnswerKey::ALL {
            if key != self.correct {
                out[n] = key;
                n += 1;
            }
        }
        out
    }
}
