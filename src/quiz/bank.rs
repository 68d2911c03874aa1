use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::BankError;
use super::{Question, QuestionId};

/// The ordered, read-only list of quiz questions. Position in the list is the
/// quiz order; ids are only used for lookup.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let bank = Self { questions };
        if bank.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::with_capacity(bank.len());
        for question in bank.questions() {
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }
        }

        Ok(bank)
    }

    /// Reads a JSON array of `{ "id", "question", "correct_answer" }` objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub(crate) fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }
}
