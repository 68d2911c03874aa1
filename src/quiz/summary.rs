use super::Session;
use super::QuestionBank;

pub const NO_ANSWERS_TEXT: &str = "No answers recorded. Please complete the quiz.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Pro,
    Solid,
    OnTrack,
    KeepLearning,
}

impl Tier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage == 100.0 {
            Tier::Pro
        } else if percentage >= 75.0 {
            Tier::Solid
        } else if percentage >= 50.0 {
            Tier::OnTrack
        } else {
            Tier::KeepLearning
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Tier::Pro => "Excellent! You're a Python pro!",
            Tier::Solid => "Great job! You have a solid understanding of Python.",
            Tier::OnTrack => "Good effort. You're on the right track with Python.",
            Tier::KeepLearning => {
                "Keep learning! There's room for improvement in your Python knowledge."
            }
        }
    }
}

/// Final report for the session. The score is taken over every question in
/// the bank, so unanswered questions count as wrong.
pub fn final_report(bank: &QuestionBank, session: &impl Session) -> String {
    let answers = match session.quiz_answers() {
        Some(answers) if !answers.is_empty() => answers,
        _ => return NO_ANSWERS_TEXT.to_string(),
    };

    let total_questions = bank.len();
    let correct_answers = answers.values().filter(|a| a.is_correct).count();
    let percentage = correct_answers as f64 / total_questions as f64 * 100.0;
    let tier = Tier::from_percentage(percentage);

    format!(
        "Quiz Completed!\nTotal Questions: {}\nCorrect Answers: {}\nScore: {:.1}%\n{}",
        total_questions,
        correct_answers,
        percentage,
        tier.text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{two_question_bank, AnswerRecord, Question, QuizSession};

    fn session_with(results: &[(u32, bool)]) -> QuizSession {
        let mut session = QuizSession::default();
        for (id, is_correct) in results {
            session
                .quiz_answers_mut()
                .insert(*id, AnswerRecord::new("x".to_string(), *is_correct));
        }
        session
    }

    fn four_question_bank() -> QuestionBank {
        QuestionBank::new((1..=4).map(|id| Question::new(id, "q", "a")).collect()).unwrap()
    }

    #[test]
    fn no_answers() {
        let bank = two_question_bank();
        assert_eq!(final_report(&bank, &QuizSession::default()), NO_ANSWERS_TEXT);

        let mut empty = QuizSession::default();
        empty.quiz_answers_mut();
        assert_eq!(final_report(&bank, &empty), NO_ANSWERS_TEXT);
    }

    #[test]
    fn all_wrong() {
        let report = final_report(&two_question_bank(), &session_with(&[(1, false), (2, false)]));
        assert_eq!(
            report,
            "Quiz Completed!\nTotal Questions: 2\nCorrect Answers: 0\nScore: 0.0%\n\
             Keep learning! There's room for improvement in your Python knowledge."
        );
    }

    #[test]
    fn all_correct() {
        let report = final_report(&two_question_bank(), &session_with(&[(1, true), (2, true)]));
        assert!(report.contains("Correct Answers: 2\n"));
        assert!(report.contains("Score: 100.0%\n"));
        assert!(report.ends_with("Excellent! You're a Python pro!"));
    }

    #[test]
    fn total_counts_unanswered_questions() {
        let report = final_report(&four_question_bank(), &session_with(&[(1, true)]));
        assert!(report.contains("Total Questions: 4\n"));
        assert!(report.contains("Score: 25.0%\n"));
    }

    #[test]
    fn tier_boundaries() {
        let bank = four_question_bank();
        let cases = [
            (&[(1, true), (2, true), (3, true)][..], "Score: 75.0%", Tier::Solid),
            (&[(1, true), (2, true), (3, false)][..], "Score: 50.0%", Tier::OnTrack),
            (&[(1, true), (2, false)][..], "Score: 25.0%", Tier::KeepLearning),
        ];

        for (results, score, tier) in cases {
            let report = final_report(&bank, &session_with(results));
            assert!(report.contains(score), "{report}");
            assert!(report.ends_with(tier.text()), "{report}");
        }
    }

    #[test]
    fn tier_precedence() {
        assert_eq!(Tier::from_percentage(100.0), Tier::Pro);
        assert_eq!(Tier::from_percentage(99.9), Tier::Solid);
        assert_eq!(Tier::from_percentage(75.0), Tier::Solid);
        assert_eq!(Tier::from_percentage(74.9), Tier::OnTrack);
        assert_eq!(Tier::from_percentage(50.0), Tier::OnTrack);
        assert_eq!(Tier::from_percentage(49.9), Tier::KeepLearning);
        assert_eq!(Tier::from_percentage(0.0), Tier::KeepLearning);
    }

    #[test]
    fn one_decimal_place() {
        let bank = QuestionBank::new((1..=3).map(|id| Question::new(id, "q", "a")).collect()).unwrap();
        let report = final_report(&bank, &session_with(&[(1, true)]));
        assert!(report.contains("Score: 33.3%\n"), "{report}");
    }
}
