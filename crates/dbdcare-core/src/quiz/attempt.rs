//! A single pass through the quiz, driven by a client.

use crate::quiz::error::QuizError;
use crate::quiz::scoring::{feedback, percentage, score};
use dbdcare_model::quiz::{QuizQuestion, QuizResult, UNANSWERED};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuizPolicy {
    /// Refuse to move past or finish with unanswered questions.
    pub require_all_answered: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum State {
    #[default]
    Intro,
    Quiz,
    Result,
}

#[derive(Debug, Clone)]
pub struct QuizAttempt {
    questions: Vec<QuizQuestion>,
    policy: QuizPolicy,
    state: State,
    current: usize,
    selected: Vec<i32>,
    result: Option<QuizResult>,
}

impl QuizAttempt {
    pub fn new(questions: Vec<QuizQuestion>, policy: QuizPolicy) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let selected = vec![UNANSWERED; questions.len()];
        Ok(Self {
            questions,
            policy,
            state: State::Intro,
            current: 0,
            selected,
            result: None,
        })
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.state == State::Quiz {
            return Err(QuizError::InvalidState(self.state));
        }
        self.state = State::Quiz;
        self.current = 0;
        self.selected.fill(UNANSWERED);
        self.result = None;
        Ok(())
    }

    pub fn select(&mut self, answer: usize) -> Result<(), QuizError> {
        self.require_state(State::Quiz)?;
        let options = self.questions[self.current].options.len();
        if answer >= options {
            return Err(QuizError::AnswerOutOfRange { answer, options });
        }
        self.selected[self.current] =
            i32::try_from(answer).map_err(|_| QuizError::AnswerOutOfRange { answer, options })?;
        Ok(())
    }

    /// Moves forward. Returns `false` at the last question.
    pub fn next(&mut self) -> Result<bool, QuizError> {
        self.require_state(State::Quiz)?;
        if self.current + 1 >= self.questions.len() {
            return Ok(false);
        }
        if self.policy.require_all_answered && !self.is_answered(self.current) {
            return Err(QuizError::Unanswered(self.current));
        }
        self.current += 1;
        Ok(true)
    }

    /// Moves back. Returns `false` at the first question.
    pub fn previous(&mut self) -> Result<bool, QuizError> {
        self.require_state(State::Quiz)?;
        if self.current == 0 {
            return Ok(false);
        }
        self.current -= 1;
        Ok(true)
    }

    #[must_use]
    pub fn can_finish(&self) -> bool {
        self.state == State::Quiz
            && self.is_last()
            && self.is_answered(self.current)
            && (!self.policy.require_all_answered || self.first_unanswered().is_none())
    }

    pub fn finish(&mut self) -> Result<&QuizResult, QuizError> {
        self.require_state(State::Quiz)?;
        if !self.is_last() || !self.is_answered(self.current) {
            return Err(QuizError::Unanswered(self.current));
        }
        if self.policy.require_all_answered {
            if let Some(index) = self.first_unanswered() {
                return Err(QuizError::Unanswered(index));
            }
        }
        let score = score(&self.questions, &self.selected)?;
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        self.state = State::Result;
        Ok(self.result.insert(QuizResult {
            score,
            total,
            percentage: percentage(score, total),
            feedback: feedback(score, total),
            response_id: None,
        }))
    }

    /// Back to the intro screen, keeping the questions.
    pub fn redo(&mut self) {
        self.state = State::Intro;
        self.current = 0;
        self.selected.fill(UNANSWERED);
        self.result = None;
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected_answers(&self) -> &[i32] {
        &self.selected
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        usize::try_from(self.selected[self.current]).ok()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Attach the id of the stored response to the result.
    pub fn set_response_id(&mut self, id: Uuid) {
        if let Some(result) = self.result.as_mut() {
            result.response_id = Some(id);
        }
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    fn is_answered(&self, index: usize) -> bool {
        self.selected[index] != UNANSWERED
    }

    fn first_unanswered(&self) -> Option<usize> {
        self.selected.iter().position(|answer| *answer == UNANSWERED)
    }

    fn require_state(&self, state: State) -> Result<(), QuizError> {
        if self.state == state { Ok(()) } else { Err(QuizError::InvalidState(self.state)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdcare_model::quiz::FeedbackTier;

    fn questions(correct: &[i32]) -> Vec<QuizQuestion> {
        correct
            .iter()
            .map(|correct_answer| QuizQuestion {
                question: "Q".to_owned(),
                options: vec!["A".to_owned(), "B".to_owned()],
                correct_answer: *correct_answer,
                explanation: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_two_question_attempt() {
        let mut attempt = QuizAttempt::new(questions(&[0, 1]), QuizPolicy::default()).unwrap();
        assert_eq!(attempt.state(), State::Intro);
        attempt.start().unwrap();
        attempt.select(0).unwrap();
        assert!(!attempt.can_finish());
        assert!(attempt.next().unwrap());
        attempt.select(0).unwrap();
        assert!(attempt.can_finish());

        let result = attempt.finish().unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.feedback.tier, FeedbackTier::Good);
        assert_eq!(result.feedback.text, "Bagus!");
        assert_eq!(attempt.state(), State::Result);
    }

    #[test]
    fn test_bounded_navigation() {
        let mut attempt = QuizAttempt::new(questions(&[0, 1, 0]), QuizPolicy::default()).unwrap();
        attempt.start().unwrap();
        assert!(!attempt.previous().unwrap());
        assert_eq!(attempt.current_index(), 0);
        assert!(attempt.next().unwrap());
        assert!(attempt.next().unwrap());
        assert!(!attempt.next().unwrap());
        assert_eq!(attempt.current_index(), 2);
    }

    #[test]
    fn test_skip_allowed_by_default() {
        let mut attempt = QuizAttempt::new(questions(&[0, 1]), QuizPolicy::default()).unwrap();
        attempt.start().unwrap();
        attempt.next().unwrap();
        assert!(attempt.finish().is_err());
        attempt.select(1).unwrap();
        let result = attempt.finish().unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(attempt.selected_answers(), &[UNANSWERED, 1]);
    }

    #[test]
    fn test_require_all_answered() {
        let policy = QuizPolicy {
            require_all_answered: true,
        };
        let mut attempt = QuizAttempt::new(questions(&[0, 1]), policy).unwrap();
        attempt.start().unwrap();
        assert_eq!(attempt.next(), Err(QuizError::Unanswered(0)));
        attempt.select(0).unwrap();
        attempt.next().unwrap();
        attempt.select(1).unwrap();
        assert_eq!(attempt.finish().unwrap().score, 2);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut attempt = QuizAttempt::new(questions(&[0]), QuizPolicy::default()).unwrap();
        assert_eq!(attempt.select(0), Err(QuizError::InvalidState(State::Intro)));
        attempt.start().unwrap();
        assert_eq!(
            attempt.select(2),
            Err(QuizError::AnswerOutOfRange { answer: 2, options: 2 })
        );
    }

    #[test]
    fn test_redo_and_restart() {
        let mut attempt = QuizAttempt::new(questions(&[0]), QuizPolicy::default()).unwrap();
        attempt.start().unwrap();
        attempt.select(0).unwrap();
        attempt.finish().unwrap();
        attempt.set_response_id(uuid::Uuid::nil());
        assert_eq!(attempt.result().and_then(|result| result.response_id), Some(uuid::Uuid::nil()));

        attempt.start().unwrap();
        assert_eq!(attempt.selected_answers(), &[UNANSWERED]);
        assert!(attempt.result().is_none());

        attempt.redo();
        assert_eq!(attempt.state(), State::Intro);
    }

    #[test]
    fn test_empty_quiz() {
        assert!(matches!(
            QuizAttempt::new(Vec::new(), QuizPolicy::default()),
            Err(QuizError::Empty)
        ));
    }
}
