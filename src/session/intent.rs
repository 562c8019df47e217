//! Player intents: the three things a rendering surface can ask for.
//!
//! Intents are plain values so a surface, a replay log, or a test can drive
//! the controller through a single `dispatch` entry point. Accepted intents
//! are recorded with a sequence number for replay.

use serde::{Deserialize, Serialize};

use super::lifeline::Lifeline;
use crate::catalog::AnswerKey;

/// A request from the rendering surface.
///
/// ```
/// use ladder_quiz::catalog::AnswerKey;
/// use ladder_quiz::session::{Intent, Lifeline};
///
/// let intents = [
///     Intent::SubmitName("Alex".into()),
///     Intent::ActivateLifeline(Lifeline::FiftyFifty),
///     Intent::SubmitAnswer(AnswerKey::A3),
/// ];
/// assert_eq!(intents.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    SubmitName(String),
    ActivateLifeline(Lifeline),
    SubmitAnswer(AnswerKey),
}

/// An accepted intent with its position in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Zero-based order among accepted intents.
    pub sequence: usize,

    /// Question the player was on when the intent was accepted.
    pub question_index: usize,

    /// The intent itself.
    pub intent: Intent,
}

impl IntentRecord {
    #[must_use]
    pub fn new(sequence: usize, question_index: usize, intent: Intent) -> Self {
        Self {
            sequence,
            question_index,
            intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serialization() {
        let intent = Intent::SubmitAnswer(AnswerKey::A2);
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(json, r#"{"kind":"submit_answer","value":"a2"}"#);

        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }

    #[test]
    fn test_record_serialization() {
        let record = IntentRecord::new(3, 1, Intent::ActivateLifeline(Lifeline::PhoneAFriend));
        let json = serde_json::to_string(&record).unwrap();
        let back: IntentRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back, record);
        assert_eq!(back.sequence, 3);
        assert_eq!(back.question_index, 1);
    }
}
