use std::collections::BTreeMap;

use super::error::SessionError;
use super::{AnswerRecord, QuestionId};

pub type QuizAnswers = BTreeMap<QuestionId, AnswerRecord>;

/// Per-conversation state owned by whoever stores it. The engine mutates it
/// through this trait and calls `save` once a turn has succeeded.
pub trait Session {
    fn current_question_id(&self) -> Option<QuestionId>;

    fn set_current_question_id(&mut self, id: Option<QuestionId>);

    /// `None` until the first answer has been recorded.
    fn quiz_answers(&self) -> Option<&QuizAnswers>;

    /// Creates the answers mapping if it does not exist yet.
    fn quiz_answers_mut(&mut self) -> &mut QuizAnswers;

    fn save(&mut self) -> Result<(), SessionError>;
}

/// Session kept in the bot's dialogue storage.
///
/// `save` only marks the session; the handler that loaded it writes it back
/// when [`QuizSession::take_pending_save`] returns true.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuizSession {
    #[serde(default)]
    pub current_question_id: Option<QuestionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_answers: Option<QuizAnswers>,
    #[serde(skip)]
    pending_save: bool,
}

impl QuizSession {
    pub fn take_pending_save(&mut self) -> bool {
        std::mem::take(&mut self.pending_save)
    }
}

impl Session for QuizSession {
    fn current_question_id(&self) -> Option<QuestionId> {
        self.current_question_id
    }

    fn set_current_question_id(&mut self, id: Option<QuestionId>) {
        self.current_question_id = id;
    }

    fn quiz_answers(&self) -> Option<&QuizAnswers> {
        self.quiz_answers.as_ref()
    }

    fn quiz_answers_mut(&mut self) -> &mut QuizAnswers {
        self.quiz_answers.get_or_insert_with(QuizAnswers::new)
    }

    fn save(&mut self) -> Result<(), SessionError> {
        self.pending_save = true;
        Ok(())
    }
}
