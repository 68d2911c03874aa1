use std::str::FromStr;

use log::{debug, warn};

use super::error::SessionError;
use super::recorder::record_answer;
use super::sequencer::Next;
use super::Session;
use super::summary::final_report;
use super::QuestionBank;

pub const WELCOME_TEXT: &str =
    "Welcome to the Python quiz! Reply to each question with the exact text of your answer.";

/// What to do with a message that arrives while no question is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FirstTurn {
    /// Treat it as an answer like any other message. It is rejected with
    /// "No current question available" and the quiz does not advance.
    #[default]
    Record,
    /// Skip recording and ask the first question right away.
    Start,
}

impl FromStr for FirstTurn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" => Ok(FirstTurn::Record),
            "start" => Ok(FirstTurn::Start),
            other => Err(other.to_string()),
        }
    }
}

pub struct QuizEngine {
    bank: QuestionBank,
    first_turn: FirstTurn,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            first_turn: FirstTurn::default(),
        }
    }

    pub fn with_first_turn(mut self, first_turn: FirstTurn) -> Self {
        self.first_turn = first_turn;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Runs one turn of the conversation and returns the replies in order.
    ///
    /// A rejected answer produces a single reply with the rejection text and
    /// leaves the session unsaved. `Err` is only returned when saving fails.
    pub fn handle(
        &self,
        message: &str,
        session: &mut impl Session,
    ) -> Result<Vec<String>, SessionError> {
        let mut replies = Vec::new();

        let current_question_id = session.current_question_id();
        if current_question_id.is_none() {
            replies.push(WELCOME_TEXT.to_string());
        }

        let skip_recording = current_question_id.is_none() && self.first_turn == FirstTurn::Start;
        if !skip_recording {
            if let Err(err) = record_answer(&self.bank, message, current_question_id, session) {
                debug!("Answer rejected for question {:?}: {}", current_question_id, err);
                return Ok(vec![err.to_string()]);
            }
        }

        let next = self.bank.next_question(current_question_id);
        if let Next::NotFound(id) = next {
            warn!("Question {} is not in the question bank, ending the quiz", id);
        }

        let (next_question, next_question_id) = next.into_parts();
        match next_question {
            Some(text) => replies.push(text.to_string()),
            None => replies.push(final_report(&self.bank, &*session)),
        }

        debug!(
            "Advancing from question {:?} to {:?}",
            current_question_id, next_question_id
        );
        session.set_current_question_id(next_question_id);
        session.save()?;

        Ok(replies)
    }
}
