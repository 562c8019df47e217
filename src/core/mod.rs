//! Core building blocks: injectable randomness and session configuration.

pub mod config;
pub mod rng;

pub use config::SessionConfig;
pub use rng::{sample_k_of_n, QuizRng, RandomSource};
