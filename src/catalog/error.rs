use thiserror::Error;

/// Load-time problems with the question catalog, prize ladder, or session
/// config.
///
/// `Json` covers parse errors from both `questions.json` and
/// `SessionConfig::from_json`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question catalog is empty")]
    Empty,

    #[error("question {index} has a blank prompt")]
    BlankPrompt { index: usize },

    #[error("question {index} has a blank option {key}")]
    BlankOption { index: usize, key: crate::catalog::AnswerKey },

    #[error("prize ladder has no rungs")]
    EmptyLadder,

    #[error("prize ladder has {rungs} rungs but the catalog has {questions} questions")]
    LadderTooShort { rungs: usize, questions: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
