//! Session configuration.
//!
//! Hosts configure a session at startup by providing:
//! - `seed`: fixes every 50/50 draw (omit for a fresh entropy seed)
//! - `ladder`: prize values, lowest rung first (defaults to the classic ladder)
//!
//! The config deserializes from JSON, so a host can keep it next to
//! `questions.json`.

use serde::{Deserialize, Serialize};

use super::rng::QuizRng;
use crate::catalog::{CatalogError, QuestionCatalog};
use crate::ladder::PrizeLadder;
use crate::session::SessionController;

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Prize ladder.
    pub ladder: PrizeLadder,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom ladder.
    #[must_use]
    pub fn with_ladder(mut self, ladder: PrizeLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Parse a config from JSON.
    ///
    /// Malformed input is reported as `CatalogError::Json`, the same variant
    /// catalog parsing uses.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create the RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> QuizRng {
        self.seed.map_or_else(QuizRng::from_entropy, QuizRng::new)
    }

    /// Validate against `catalog` and start a session.
    pub fn build(self, catalog: QuestionCatalog) -> Result<SessionController<QuizRng>, CatalogError> {
        let rng = self.rng();
        SessionController::with_source(catalog, self.ladder, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AnswerKey, QuestionRecord};

    fn catalog(n: usize) -> QuestionCatalog {
        QuestionCatalog::new((0..n).map(|i| QuestionRecord {
            q: format!("Question {}", i),
            a1: "a".into(),
            a2: "b".into(),
            a3: "c".into(),
            a4: "d".into(),
            correct: AnswerKey::A1,
        }))
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.ladder, PrizeLadder::classic());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_seed(9)
            .with_ladder(PrizeLadder::from_values([10, 20]).unwrap());

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rng().seed(), 9);
        assert_eq!(config.ladder.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let config = SessionConfig::from_json(r#"{"seed": 7, "ladder": [1, 2, 3]}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ladder.max_rung(), 2);

        let partial = SessionConfig::from_json("{}").unwrap();
        assert_eq!(partial, SessionConfig::default());

        assert!(matches!(
            SessionConfig::from_json(r#"{"ladder": []}"#),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(SessionConfig::from_json("{seed"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_build_validates_ladder() {
        let short = SessionConfig::new().with_ladder(PrizeLadder::from_values([1]).unwrap());
        assert!(matches!(
            short.build(catalog(2)),
            Err(CatalogError::LadderTooShort { rungs: 1, questions: 2 })
        ));

        let session = SessionConfig::new().with_seed(1).build(catalog(14)).unwrap();
        assert_eq!(session.catalog().len(), 14);
        assert_eq!(session.ladder().len(), 14);
    }
}
