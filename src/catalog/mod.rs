//! Question catalog: the static, ordered list of questions a session walks.
//!
//! - `AnswerKey`: the four option slots (`a1..a4`)
//! - `Question`: one immutable question with its correct key
//! - `QuestionCatalog`: validated, non-empty sequence loaded at startup

pub mod error;
pub mod question;
pub mod registry;

pub use error::CatalogError;
pub use question::{AnswerKey, Question, QuestionRecord};
pub use registry::QuestionCatalog;
