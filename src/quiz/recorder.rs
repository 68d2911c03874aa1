use super::error::QuizError;
use super::Session;
use super::{AnswerRecord, QuestionBank, QuestionId};

/// Grades `answer` against the pending question and stores it in the session,
/// replacing any earlier answer to the same question. Does not save.
///
/// Blank answers are rejected after trimming, but grading compares the raw
/// text with the correct answer exactly.
pub fn record_answer(
    bank: &QuestionBank,
    answer: &str,
    current_question_id: Option<QuestionId>,
    session: &mut impl Session,
) -> Result<(), QuizError> {
    let question_id = current_question_id.ok_or(QuizError::NoCurrentQuestion)?;
    let question = bank.get(question_id).ok_or(QuizError::InvalidQuestionId)?;

    if answer.trim().is_empty() {
        return Err(QuizError::EmptyAnswer);
    }

    let is_correct = answer == question.correct_answer;
    session
        .quiz_answers_mut()
        .insert(question_id, AnswerRecord::new(answer.to_string(), is_correct));

    Ok(())
}
