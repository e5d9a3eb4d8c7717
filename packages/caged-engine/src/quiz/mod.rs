//! # Quiz Module
//!
//! Randomized chord-identification questions built from the shape catalog
//! and the position resolver.
//!
//! ## Sub-modules
//! - `types` - QuizConfig, QuizQuestion, QuizAnswer
//! - `rng` - The injectable randomness seam and a Fisher-Yates shuffle
//! - `generator` - Question generation and answer validation
//! - `session` - One quiz run: questions, answers, score, completion
//! - `preferences` - Externally persisted quiz preferences (JSON or YAML)
//!
//! ## Randomness
//! The generator is the only non-deterministic code in the engine. It draws
//! from a [`RandomSource`], implemented for every `rand::RngCore`, so tests
//! can pass a seeded `StdRng` or a [`FixedSequence`].
//!
//! ## Example
//! ```rust
//! use caged_engine::quiz::{generate_questions, validate_answer, QuizConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let questions = generate_questions(&QuizConfig::default(), &mut rng).unwrap();
//!
//! assert_eq!(questions.len(), 10);
//! assert!(validate_answer(&questions[0], questions[0].correct_answer));
//! ```

mod generator;
mod preferences;
mod rng;
mod session;
mod types;

pub use generator::{generate_questions, validate_answer};
pub use preferences::{QuizPreferences, MAX_QUESTION_COUNT};
pub use rng::{shuffle, FixedSequence, RandomSource};
pub use session::{QuizSession, QuizSummary};
pub use types::{QuizAnswer, QuizConfig, QuizQuestion};
