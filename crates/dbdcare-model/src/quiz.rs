use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;
use uuid::Uuid;

/// Marker for a question the user skipped.
pub const UNANSWERED: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizSubmission {
    /// One entry per question, [`UNANSWERED`] for skipped questions.
    pub answers: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    #[strum(serialize = "Luar Biasa!")]
    Excellent,
    #[strum(serialize = "Bagus!")]
    Good,
    #[strum(serialize = "Belajar Lagi!")]
    KeepLearning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizFeedback {
    pub tier: FeedbackTier,
    #[schema(example = "Luar Biasa!")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Pahlawan Cegah DBD")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub feedback: QuizFeedback,
    /// Set when the attempt was stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<Uuid>,
}

/// Admin grading of a single stored response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display)]
#[serde(rename_all = "snake_case")]
pub enum ResponseBadge {
    Excellent,
    Good,
    Fair,
    #[strum(serialize = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub id: Uuid,
    pub username: String,
    pub score: i32,
    pub answers: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub badge: ResponseBadge,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizResultStats {
    pub total_responses: u64,
    pub average_score: f64,
    pub highest_score: i32,
    pub lowest_score: i32,
    pub pass_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResults {
    pub stats: QuizResultStats,
    pub responses: Vec<QuizResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_text() {
        assert_eq!("Luar Biasa!", FeedbackTier::Excellent.to_string());
        assert_eq!("Bagus!", FeedbackTier::Good.as_ref());
        assert_eq!(r#""keep_learning""#, serde_json::to_string(&FeedbackTier::KeepLearning).unwrap());
    }

    #[test]
    fn test_badge_display() {
        assert_eq!("Needs Improvement", ResponseBadge::NeedsImprovement.to_string());
    }

    #[test]
    fn test_missing_explanation_defaults() {
        let question: QuizQuestion =
            serde_json::from_str(r#"{"question":"Q","options":["A","B"],"correct_answer":1}"#).unwrap();
        assert_eq!(question.explanation, "");
    }
}
