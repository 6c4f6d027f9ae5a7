use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz has no questions")]
    Empty,

    #[error("Action not allowed while the quiz is in state {0:?}")]
    InvalidState(super::State),

    #[error("Answer {answer} is out of range for {options} options")]
    AnswerOutOfRange { answer: usize, options: usize },

    #[error("Question {0} has not been answered")]
    Unanswered(usize),

    #[error("Expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },
}
