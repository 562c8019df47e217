//! The ordered question catalog.
//!
//! `QuestionCatalog` is loaded once at startup and never mutated. Ordinals are
//! assigned from position, so they are always contiguous from 0.

use super::error::CatalogError;
use super::question::{AnswerKey, Question, QuestionRecord};

/// Non-empty, ordered, immutable sequence of questions.
///
/// ## Example
///
/// ```
/// use ladder_quiz::catalog::QuestionCatalog;
///
/// let json = r#"[
///     {"q": "2 + 2?", "a1": "3", "a2": "4", "a3": "5", "a4": "6", "correct": "a2"}
/// ]"#;
///
/// let catalog = QuestionCatalog::from_json(json).unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(0).unwrap().prompt, "2 + 2?");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a catalog from wire records, in order.
    pub fn new(records: impl IntoIterator<Item = QuestionRecord>) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Question::from_record(index, record))
            .collect();

        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        for question in &questions {
            if question.prompt.trim().is_empty() {
                return Err(CatalogError::BlankPrompt { index: question.index });
            }
            if let Some(key) = AnswerKey::ALL
                .into_iter()
                .find(|&key| question.option(key).trim().is_empty())
            {
                return Err(CatalogError::BlankOption { index: question.index, key });
            }
        }

        Ok(Self { questions })
    }

    /// Parse a JSON array of `{q, a1, a2, a3, a4, correct}` records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Get a question by ordinal.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Ordinal of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    /// Iterate over questions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
