pub mod bank;
pub mod engine;
pub mod error;
pub mod recorder;
pub mod sequencer;
pub mod session;
pub mod summary;

pub use bank::QuestionBank;
pub use engine::{FirstTurn, QuizEngine};
pub use session::{QuizSession, Session};

pub type QuestionId = u32;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub correct_answer: String,
}

impl Question {
    #[cfg(test)]
    pub fn new(id: QuestionId, question: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            correct_answer: correct_answer.into(),
        }
    }
}

/// What the user answered for one question, graded once when recorded.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnswerRecord {
    pub user_answer: String,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(user_answer: String, is_correct: bool) -> Self {
        Self {
            user_answer,
            is_correct,
        }
    }
}

#[cfg(test)]
pub(crate) fn two_question_bank() -> QuestionBank {
    QuestionBank::new(vec![Question::new(1, "Q1", "A"), Question::new(2, "Q2", "B")])
        .expect("two distinct questions form a valid bank")
}
