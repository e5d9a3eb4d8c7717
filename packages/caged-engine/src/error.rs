//! # Error Types
//!
//! This module defines all error types for the CAGED engine.
//!
//! Every failure is a local validation failure raised at the boundary of a
//! public function. Nothing is transient, so nothing is retried: the caller
//! either falls back to a default or surfaces the message.
//!
//! ## Error Types
//! - `InvalidNote` - A note name outside the 12-symbol chromatic alphabet
//! - `InvalidConfiguration` - Bad quiz preferences or an inverted fret range
//! - `OutOfRangeIndex` - A string index outside 0..=5, a negative fret, or a
//!   fret bound past the end of the neck
//! - `QuizFinished` - An answer submitted to a completed quiz session
//!
//! ## Usage
//! ```rust
//! use caged_engine::{note_to_number, CagedError};
//!
//! match note_to_number("H") {
//!     Ok(pc) => println!("pitch class {}", pc),
//!     Err(CagedError::InvalidNote(name)) => eprintln!("unknown note {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CagedError {
    /// A note name that is not one of `C C# D D# E F F# G G# A A# B`.
    ///
    /// # Example
    /// ```
    /// # use caged_engine::CagedError;
    /// let err = CagedError::InvalidNote("Hb".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: 'Hb'");
    /// ```
    #[error("Invalid note name: '{0}'")]
    InvalidNote(String),

    /// Invalid configuration.
    ///
    /// Occurs when quiz preferences have empty allowed lists, an
    /// out-of-range question count, letters outside the CAGED alphabet, or
    /// when a display fret range starts after it ends.
    ///
    /// # Example
    /// ```
    /// # use caged_engine::CagedError;
    /// let err = CagedError::InvalidConfiguration("questionCount must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: questionCount must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A string or fret coordinate outside the fretboard.
    ///
    /// # Example
    /// ```
    /// # use caged_engine::CagedError;
    /// let err = CagedError::OutOfRangeIndex { axis: "string", value: 6, expected: "0..=5" };
    /// assert_eq!(err.to_string(), "string index 6 out of range (expected 0..=5)");
    /// ```
    #[error("{axis} index {value} out of range (expected {expected})")]
    OutOfRangeIndex {
        axis: &'static str,
        value: i64,
        expected: &'static str,
    },

    /// An answer was submitted after the last question was answered.
    #[error("Quiz is already completed")]
    QuizFinished,
}

impl CagedError {
    /// Short machine-readable name of the variant, used by the bindings.
    pub fn kind(&self) -> &'static str {
        match self {
            CagedError::InvalidNote(_) => "InvalidNote",
            CagedError::InvalidConfiguration(_) => "InvalidConfiguration",
            CagedError::OutOfRangeIndex { .. } => "OutOfRangeIndex",
            CagedError::QuizFinished => "QuizFinished",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CagedError>;
