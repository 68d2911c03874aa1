use thiserror::Error;

use super::QuestionId;

/// Rejections of a user's answer. The `Display` text is sent to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No current question available")]
    NoCurrentQuestion,
    #[error("Invalid question ID")]
    InvalidQuestionId,
    #[error("Please provide an answer")]
    EmptyAnswer,
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question list is empty")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to persist session: {0}")]
    Persist(String),
}
