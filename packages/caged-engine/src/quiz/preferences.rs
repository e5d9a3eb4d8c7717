//! Quiz preferences as persisted by the UI layer.
//!
//! The stored shape is `{ quizMode, questionCount, allowedChords,
//! allowedShapes }`. Values arrive from outside the engine, so letters are
//! read as plain strings and checked here: a bad letter or count is an
//! `InvalidConfiguration`, never a silent fallback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::QuizConfig;
use crate::error::{CagedError, Result};
use crate::shapes::{CagedLetter, ChordQuality};

/// Upper bound on `questionCount` in stored preferences.
pub const MAX_QUESTION_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizPreferences {
    pub quiz_mode: bool,
    pub question_count: i64,
    pub allowed_chords: Vec<String>,
    pub allowed_shapes: Vec<String>,
}

impl Default for QuizPreferences {
    fn default() -> Self {
        let all: Vec<String> = CagedLetter::ALL.iter().map(|l| l.to_string()).collect();
        Self {
            quiz_mode: false,
            question_count: 10,
            allowed_chords: all.clone(),
            allowed_shapes: all,
        }
    }
}

impl QuizPreferences {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| CagedError::InvalidConfiguration(format!("malformed preferences: {}", e)))
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source)
            .map_err(|e| CagedError::InvalidConfiguration(format!("malformed preferences: {}", e)))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CagedError::InvalidConfiguration(format!("cannot serialize preferences: {}", e)))
    }

    /// Check every field and build a generator config.
    pub fn validate(&self) -> Result<QuizConfig> {
        if self.question_count < 1 || self.question_count > MAX_QUESTION_COUNT as i64 {
            return Err(CagedError::InvalidConfiguration(format!(
                "questionCount must be between 1 and {}, got {}",
                MAX_QUESTION_COUNT, self.question_count
            )));
        }
        let config = QuizConfig {
            question_count: self.question_count as usize,
            allowed_chords: parse_letters("allowedChords", &self.allowed_chords)?,
            allowed_shapes: parse_letters("allowedShapes", &self.allowed_shapes)?,
            quality: ChordQuality::Major,
        };
        config.validate()?;
        debug!(
            question_count = config.question_count,
            chords = config.allowed_chords.len(),
            shapes = config.allowed_shapes.len(),
            "validated quiz preferences"
        );
        Ok(config)
    }
}

/// Parse letters, dropping repeats but keeping first-seen order.
///
/// Stored letters must be exact uppercase names; no trimming or case folding.
fn parse_letters(field: &str, raw: &[String]) -> Result<Vec<CagedLetter>> {
    let mut letters = Vec::with_capacity(raw.len());
    for entry in raw {
        let letter = CagedLetter::ALL
            .into_iter()
            .find(|l| l.as_str() == entry)
            .ok_or_else(|| {
                CagedError::InvalidConfiguration(format!(
                    "{} contains '{}', expected one of C, A, G, E, D",
                    field, entry
                ))
            })?;
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CagedLetter::*;

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"quizMode":true,"questionCount":5,"allowedChords":["C","G"],"allowedShapes":["E","A","E"]}"#;
        let prefs = QuizPreferences::from_json(json).unwrap();
        assert!(prefs.quiz_mode);
        let config = prefs.validate().unwrap();
        assert_eq!(config.question_count, 5);
        assert_eq!(config.allowed_chords, vec![C, G]);
        assert_eq!(config.allowed_shapes, vec![E, A]);
        let again = QuizPreferences::from_json(&prefs.to_json().unwrap()).unwrap();
        assert_eq!(again, prefs);
    }

    #[test]
    fn test_yaml_with_defaults() {
        let prefs = QuizPreferences::from_yaml("questionCount: 3\nallowedShapes: [D]\n").unwrap();
        let config = prefs.validate().unwrap();
        assert_eq!(config.question_count, 3);
        assert_eq!(config.allowed_chords, CagedLetter::ALL.to_vec());
        assert_eq!(config.allowed_shapes, vec![D]);
        assert!(!prefs.quiz_mode);
    }

    #[test]
    fn test_out_of_range_counts() {
        for count in [0, -3, MAX_QUESTION_COUNT as i64 + 1, 1000] {
            let prefs = QuizPreferences {
                question_count: count,
                ..QuizPreferences::default()
            };
            assert!(matches!(
                prefs.validate(),
                Err(CagedError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_letters_outside_alphabet() {
        let prefs = QuizPreferences::from_json(r#"{"allowedChords":["C","B"]}"#).unwrap();
        let err = prefs.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: allowedChords contains 'B', expected one of C, A, G, E, D"
        );
    }

    #[test]
    fn test_letters_must_match_exactly() {
        for json in [
            r#"{"allowedChords":["c"]}"#,
            r#"{"allowedChords":[" C"]}"#,
            r#"{"allowedChords":["C"],"allowedShapes":["e"]}"#,
            r#"{"allowedChords":["c"," g "],"allowedShapes":["e"]}"#,
        ] {
            let prefs = QuizPreferences::from_json(json).unwrap();
            assert!(
                matches!(prefs.validate(), Err(CagedError::InvalidConfiguration(_))),
                "{} should be rejected",
                json
            );
        }
    }

    #[test]
    fn test_largest_stored_count() {
        let prefs = QuizPreferences {
            question_count: MAX_QUESTION_COUNT as i64,
            ..QuizPreferences::default()
        };
        assert_eq!(prefs.validate().unwrap().question_count, MAX_QUESTION_COUNT);
    }

    #[test]
    fn test_empty_lists_rejected() {
        let prefs = QuizPreferences::from_json(r#"{"allowedShapes":[]}"#).unwrap();
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            QuizPreferences::from_json("{\"questionCount\": \"ten\"}"),
            Err(CagedError::InvalidConfiguration(_))
        ));
        assert!(QuizPreferences::from_yaml("questionCount: [").is_err());
    }
}
