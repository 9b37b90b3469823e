//! Question drawing and answer scoring.

use rand::Rng;
use rand::rngs::StdRng;

use qb_bank::{Question, QuestionBank};

use crate::error::{EngineError, EngineResult};

/// Points awarded for a correct answer.
pub const CORRECT_POINTS: i32 = 5;

/// Points deducted for a wrong answer.
pub const INCORRECT_POINTS: i32 = -2;

/// A question drawn from the bank, tagged with its category.
#[derive(Debug, Clone)]
pub struct DrawnQuestion {
    /// Name of the category it was drawn from.
    pub category: String,
    /// The question itself.
    pub question: Question,
}

/// Draw one question: uniform over non-empty categories, then uniform over
/// the questions within the chosen category.
///
/// Fails with [`EngineError::NoQuestionsAvailable`] when the bank holds no
/// answerable questions — including the empty-bank fallback after a load
/// failure.
pub fn draw_question(bank: &QuestionBank, rng: &mut StdRng) -> EngineResult<DrawnQuestion> {
    let candidates: Vec<_> = bank
        .categories
        .iter()
        .filter(|c| !c.questions.is_empty())
        .collect();

    if candidates.is_empty() {
        return Err(EngineError::NoQuestionsAvailable(bank.topic.clone()));
    }

    let category = candidates[rng.random_range(0..candidates.len())];
    let question = &category.questions[rng.random_range(0..category.questions.len())];

    Ok(DrawnQuestion {
        category: category.name.clone(),
        question: question.clone(),
    })
}

/// Score a selected option.
///
/// Returns the signed delta the caller applies to the score. Does not
/// mutate any game state. An out-of-range index fails with
/// [`EngineError::InvalidSelection`] and no score change.
pub fn score_answer(question: &Question, selected: usize) -> EngineResult<i32> {
    let option = question
        .options
        .get(selected)
        .ok_or(EngineError::InvalidSelection {
            index: selected,
            available: question.options.len(),
        })?;

    Ok(if option.correct {
        CORRECT_POINTS
    } else {
        INCORRECT_POINTS
    })
}
