//! One run of the quiz, driven one answer at a time.

use serde::Serialize;
use tracing::debug;

use super::generator::{generate_questions, validate_answer};
use super::rng::RandomSource;
use super::types::{QuizAnswer, QuizConfig, QuizQuestion};
use crate::error::{CagedError, Result};
use crate::shapes::CagedLetter;

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u8,
}

/// Questions plus the answers submitted so far.
///
/// Answers are recorded in question order; once the last question is
/// answered the session is completed and rejects further submissions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<QuizAnswer>,
    current: usize,
    score: usize,
    completed: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(CagedError::InvalidConfiguration(
                "a quiz needs at least one question".to_string(),
            ));
        }
        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            current: 0,
            score: 0,
            completed: false,
        })
    }

    /// Generate questions and start a session over them.
    pub fn start<R>(config: &QuizConfig, rng: &mut R) -> Result<Self>
    where
        R: RandomSource + ?Sized,
    {
        Self::new(generate_questions(config, rng)?)
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn submit(&mut self, selected: CagedLetter) -> Result<QuizAnswer> {
        let question = self.current_question().ok_or(CagedError::QuizFinished)?;
        let answer = QuizAnswer {
            question_id: question.id,
            selected,
            is_correct: validate_answer(question, selected),
        };
        self.answers.push(answer);
        if answer.is_correct {
            self.score += 1;
        }
        self.current += 1;
        if self.current == self.questions.len() {
            self.completed = true;
            debug!(score = self.score, total = self.questions.len(), "quiz completed");
        }
        Ok(answer)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn summary(&self) -> QuizSummary {
        let total = self.questions.len();
        let percentage = ((self.score * 100 + total / 2) / total) as u8;
        QuizSummary {
            correct: self.score,
            total,
            percentage,
        }
    }
}
