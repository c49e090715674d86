//! Quiz progression state machine.
//!
//! A session walks the questions of one level. A correct answer locks the
//! input, unlocks Next and bumps the level counter; Next either moves to the
//! next question of the loaded set or reloads the question set for the
//! current (possibly just incremented) level from index 0. Levels advance
//! only through correct answers, never by exhausting the list.

use crate::models::{questions_for_level, total_levels, QuizQuestion};

/// Phase of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Input enabled, Next disabled.
    Answering,
    /// Input locked after a correct answer, Next enabled.
    Answered,
    /// The current level has no questions. Terminal.
    Complete,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The level counter moved to `new_level`; the caller persists it.
    Correct { new_level: u32 },
    Wrong,
    /// Submit while locked or complete; nothing changed.
    Ignored,
}

#[derive(Debug)]
pub struct QuizSession {
    level: u32,
    questions: Vec<&'static QuizQuestion>,
    question_index: usize,
    phase: QuizPhase,
    message: Option<String>,
}

impl QuizSession {
    pub fn new(level: u32) -> Self {
        let mut session = Self {
            level,
            questions: Vec::new(),
            question_index: 0,
            phase: QuizPhase::Answering,
            message: None,
        };
        session.reload(level);
        session
    }

    /// Load the question set for `level` from index 0. An empty set is the
    /// defined "no questions for level" terminal condition.
    fn reload(&mut self, level: u32) {
        self.level = level;
        self.questions = questions_for_level(level);
        self.question_index = 0;
        self.message = None;
        self.phase = if self.questions.is_empty() {
            QuizPhase::Complete
        } else {
            QuizPhase::Answering
        };
    }

    /// Check `input` against the current question, case-insensitively.
    ///
    /// A match locks the input, unlocks Next and increments the level counter
    /// even if more questions remain at the current level. That couples
    /// "answer this question correctly" with "unlock the next level" exactly
    /// as the app has always behaved.
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        if self.phase != QuizPhase::Answering {
            return SubmitOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.question_index) else {
            return SubmitOutcome::Ignored;
        };

        if input.to_lowercase() == question.translation.to_lowercase() {
            self.phase = QuizPhase::Answered;
            self.level += 1;
            self.message = Some("Correct! 🎉".to_string());
            SubmitOutcome::Correct {
                new_level: self.level,
            }
        } else {
            self.message = Some(format!(
                "Wrong! The correct answer is: {}",
                question.translation
            ));
            SubmitOutcome::Wrong
        }
    }

    /// Move on after a correct answer. Within the loaded set this steps to
    /// the next question; past its end it reloads the current level's set.
    /// A no-op unless the current question has been answered.
    pub fn advance(&mut self) {
        if self.phase != QuizPhase::Answered {
            return;
        }
        if self.question_index + 1 < self.questions.len() {
            self.question_index += 1;
            self.phase = QuizPhase::Answering;
            self.message = None;
        } else {
            self.reload(self.level);
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.question_index).copied()
    }

    /// 1-based position within the loaded set, for display.
    pub fn question_number(&self) -> usize {
        self.question_index + 1
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Fraction of levels reached, clamped to 1.0 once past the last one.
    pub fn progress_ratio(&self) -> f64 {
        let total = total_levels();
        if total == 0 {
            return 0.0;
        }
        (self.level as f64 / total as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_locks_input_and_bumps_level() {
        let mut session = QuizSession::new(1);
        assert_eq!(session.phase(), QuizPhase::Answering);

        let outcome = session.submit("Apel");
        assert_eq!(outcome, SubmitOutcome::Correct { new_level: 2 });
        assert_eq!(session.phase(), QuizPhase::Answered);
        assert_eq!(session.level(), 2);
        assert_eq!(session.message(), Some("Correct! 🎉"));
    }

    #[test]
    fn answer_matching_is_case_insensitive() {
        for input in ["APEL", "apel", "Apel", "aPeL"] {
            let mut session = QuizSession::new(1);
            assert_eq!(
                session.submit(input),
                SubmitOutcome::Correct { new_level: 2 },
                "input {:?} should match",
                input
            );
        }
    }

    #[test]
    fn wrong_answer_leaves_state_untouched() {
        let mut session = QuizSession::new(1);
        let outcome = session.submit("Pisang");
        assert_eq!(outcome, SubmitOutcome::Wrong);
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.level(), 1);
        assert_eq!(
            session.message(),
            Some("Wrong! The correct answer is: Apel")
        );
        // Input stays enabled: a retry can still succeed.
        assert_eq!(session.submit("apel"), SubmitOutcome::Correct { new_level: 2 });
    }

    #[test]
    fn whitespace_is_not_ignored() {
        let mut session = QuizSession::new(1);
        assert_eq!(session.submit(" apel"), SubmitOutcome::Wrong);
    }

    #[test]
    fn advance_after_correct_reloads_next_level() {
        // Level 1 has exactly one question, so Next reloads the incremented
        // level's set from index 0.
        let mut session = QuizSession::new(1);
        session.submit("apel");
        session.advance();

        assert_eq!(session.level(), 2);
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.current_question().map(|q| q.word), Some("Banana"));
        assert_eq!(session.question_number(), 1);
        assert!(session.message().is_none());
    }

    #[test]
    fn advance_without_a_correct_answer_is_a_noop() {
        let mut session = QuizSession::new(3);
        session.advance();
        assert_eq!(session.level(), 3);
        assert_eq!(session.current_question().map(|q| q.word), Some("Car"));

        session.submit("wrong");
        session.advance();
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.level(), 3);
    }

    #[test]
    fn submit_while_locked_is_ignored() {
        let mut session = QuizSession::new(1);
        session.submit("apel");
        assert_eq!(session.submit("apel"), SubmitOutcome::Ignored);
        assert_eq!(session.level(), 2);
    }

    #[test]
    fn level_without_questions_is_terminal() {
        let session = QuizSession::new(total_levels() + 1);
        assert_eq!(session.phase(), QuizPhase::Complete);
        assert!(session.current_question().is_none());

        let mut session = session;
        assert_eq!(session.submit("anything"), SubmitOutcome::Ignored);
        session.advance();
        assert_eq!(session.phase(), QuizPhase::Complete);
    }

    #[test]
    fn finishing_the_last_level_completes_the_quiz() {
        let last = total_levels();
        let mut session = QuizSession::new(last);
        session.submit("Saya punya komputer baru");
        assert_eq!(session.level(), last + 1);
        session.advance();
        assert_eq!(session.phase(), QuizPhase::Complete);
    }

    #[test]
    fn progress_ratio_is_clamped() {
        let session = QuizSession::new(1);
        assert!(session.progress_ratio() > 0.0);
        let session = QuizSession::new(total_levels() + 5);
        assert_eq!(session.progress_ratio(), 1.0);
    }
}
