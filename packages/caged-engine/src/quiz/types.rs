//! Quiz data types.

use serde::{Deserialize, Serialize};

use crate::error::{CagedError, Result};
use crate::shapes::{CagedLetter, ChordQuality};

/// Validated input to the question generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    pub question_count: usize,
    pub allowed_chords: Vec<CagedLetter>,
    pub allowed_shapes: Vec<CagedLetter>,
    #[serde(default)]
    pub quality: ChordQuality,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: 10,
            allowed_chords: CagedLetter::ALL.to_vec(),
            allowed_shapes: CagedLetter::ALL.to_vec(),
            quality: ChordQuality::Major,
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<()> {
        if self.question_count == 0 {
            return Err(CagedError::InvalidConfiguration(
                "questionCount must be at least 1".to_string(),
            ));
        }
        if self.allowed_chords.is_empty() {
            return Err(CagedError::InvalidConfiguration(
                "allowedChords must not be empty".to_string(),
            ));
        }
        if self.allowed_shapes.is_empty() {
            return Err(CagedError::InvalidConfiguration(
                "allowedShapes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One "which chord is this?" question.
///
/// The student sees `shape_used` played at `position` and must name the
/// chord; `choices` always holds all five chord letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: usize,
    pub root_chord: CagedLetter,
    pub quality: ChordQuality,
    pub shape_used: CagedLetter,
    pub position: u8,
    pub choices: Vec<CagedLetter>,
    pub correct_answer: CagedLetter,
}

/// A submitted answer and whether it was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: usize,
    pub selected: CagedLetter,
    pub is_correct: bool,
}
