pub mod attempt;
pub mod error;
pub mod question;
pub mod scoring;

pub use attempt::{QuizAttempt, QuizPolicy, State};
pub use error::QuizError;
pub use question::{default_questions, normalize_question};
pub use scoring::{feedback, percentage, response_badge, result_stats, score};
