use super::{Question, QuestionBank, QuestionId};

/// Where the quiz goes after the current question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Next<'a> {
    Question(&'a Question),
    /// The current question was the last one.
    Completed,
    /// The current id is not in the bank.
    NotFound(QuestionId),
}

impl<'a> Next<'a> {
    /// Question text and id to ask next, `(None, None)` when there is nothing
    /// left to ask. An unknown id ends the quiz the same way as the last one.
    pub fn into_parts(self) -> (Option<&'a str>, Option<QuestionId>) {
        match self {
            Next::Question(question) => (Some(question.question.as_str()), Some(question.id)),
            Next::Completed | Next::NotFound(_) => (None, None),
        }
    }
}

impl QuestionBank {
    /// Follows list order, starting from the first question when nothing has
    /// been asked yet.
    pub fn next_question(&self, current_question_id: Option<QuestionId>) -> Next<'_> {
        let questions = self.questions();
        let Some(current_id) = current_question_id else {
            return match questions.first() {
                Some(first) => Next::Question(first),
                None => Next::Completed,
            };
        };

        match self.position(current_id) {
            None => Next::NotFound(current_id),
            Some(index) => match questions.get(index + 1) {
                Some(next) => Next::Question(next),
                None => Next::Completed,
            },
        }
    }
}
