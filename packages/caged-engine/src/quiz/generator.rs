//! Question generation and answer checking.

use tracing::{debug, trace};

use super::rng::{shuffle, RandomSource};
use super::types::{QuizConfig, QuizQuestion};
use crate::error::Result;
use crate::position::resolve_offset;
use crate::shapes::{shape, CagedLetter};

/// Generate `config.question_count` questions.
///
/// Each question picks a root chord and a shape uniformly from the allowed
/// lists, places the shape at the fret that sounds that root, and offers all
/// five chord letters in shuffled order. An invalid config fails before any
/// question is drawn.
pub fn generate_questions<R>(config: &QuizConfig, rng: &mut R) -> Result<Vec<QuizQuestion>>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;

    let mut questions = Vec::with_capacity(config.question_count);
    for i in 0..config.question_count {
        let root_chord = config.allowed_chords[rng.next_below(config.allowed_chords.len())];
        let shape_used = config.allowed_shapes[rng.next_below(config.allowed_shapes.len())];
        let natural_root = shape(shape_used, config.quality).natural_root();
        let position = resolve_offset(root_chord.pitch_class(), natural_root);

        let mut choices = CagedLetter::ALL.to_vec();
        shuffle(&mut choices, rng);

        trace!(
            id = i + 1,
            root = %root_chord,
            shape = %shape_used,
            position,
            "generated quiz question"
        );
        questions.push(QuizQuestion {
            id: i + 1,
            root_chord,
            quality: config.quality,
            shape_used,
            position,
            choices,
            correct_answer: root_chord,
        });
    }
    debug!(count = questions.len(), quality = %config.quality, "generated quiz");
    Ok(questions)
}

/// Strict equality against the question's correct answer.
pub fn validate_answer(question: &QuizQuestion, selected: CagedLetter) -> bool {
    question.correct_answer == selected
}
