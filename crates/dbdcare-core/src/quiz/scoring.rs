use crate::quiz::error::QuizError;
use dbdcare_model::quiz::{FeedbackTier, QuizFeedback, QuizQuestion, QuizResponse, QuizResultStats, ResponseBadge};

pub const HERO_BADGE: &str = "Pahlawan Cegah DBD";

/// Lowest percentage for the top tier and the badge.
pub const EXCELLENT_PERCENTAGE: f64 = 80.0;
/// Lowest percentage for `Bagus!`. Half of the questions right already counts.
pub const GOOD_PERCENTAGE: f64 = 50.0;

/// Minimum stored score counted as a pass in the admin results.
pub const PASS_SCORE: i32 = 8;

/// Number of answers equal to the correct index. Unanswered entries never match.
pub fn score(questions: &[QuizQuestion], answers: &[i32]) -> Result<u32, QuizError> {
    if questions.len() != answers.len() {
        return Err(QuizError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.correct_answer == **answer)
        .count();
    Ok(u32::try_from(correct).unwrap_or(u32::MAX))
}

#[must_use]
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(total) * 100.0
}

#[must_use]
pub fn feedback(score: u32, total: u32) -> QuizFeedback {
    let percentage = percentage(score, total);
    let tier = if percentage >= EXCELLENT_PERCENTAGE {
        FeedbackTier::Excellent
    } else if percentage >= GOOD_PERCENTAGE {
        FeedbackTier::Good
    } else {
        FeedbackTier::KeepLearning
    };
    QuizFeedback {
        tier,
        text: tier.to_string(),
        badge: (tier == FeedbackTier::Excellent).then(|| HERO_BADGE.to_owned()),
    }
}

#[must_use]
pub fn response_badge(score: i32) -> ResponseBadge {
    match score {
        9.. => ResponseBadge::Excellent,
        7..=8 => ResponseBadge::Good,
        5..=6 => ResponseBadge::Fair,
        _ => ResponseBadge::NeedsImprovement,
    }
}

#[must_use]
pub fn result_stats(responses: &[QuizResponse]) -> QuizResultStats {
    let Some(highest_score) = responses.iter().map(|response| response.score).max() else {
        return QuizResultStats::default();
    };
    let lowest_score = responses.iter().map(|response| response.score).min().unwrap_or_default();
    let sum: i64 = responses.iter().map(|response| i64::from(response.score)).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = sum as f64 / responses.len() as f64;
    QuizResultStats {
        total_responses: responses.len() as u64,
        average_score: (average * 100.0).round() / 100.0,
        highest_score,
        lowest_score,
        pass_count: responses.iter().filter(|response| response.score >= PASS_SCORE).count() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use dbdcare_model::quiz::UNANSWERED;
    use uuid::Uuid;

    fn question(correct_answer: i32) -> QuizQuestion {
        QuizQuestion {
            question: "Q".to_owned(),
            options: vec!["A".to_owned(), "B".to_owned()],
            correct_answer,
            explanation: String::new(),
        }
    }

    fn response(score: i32) -> QuizResponse {
        QuizResponse {
            id: Uuid::new_v4(),
            username: "budi".to_owned(),
            score,
            answers: Vec::new(),
            created_at: NaiveDateTime::default(),
            badge: response_badge(score),
        }
    }

    #[test]
    fn test_two_questions_one_right() {
        let questions = vec![question(0), question(1)];
        let score = score(&questions, &[0, 0]).unwrap();
        assert_eq!(score, 1);
        let feedback = feedback(score, 2);
        assert_eq!(feedback.text, "Bagus!");
        assert_eq!(feedback.badge, None);
    }

    #[test]
    fn test_score_bounds() {
        let questions = vec![question(0), question(1), question(1)];
        assert_eq!(score(&questions, &[0, 1, 1]).unwrap(), 3);
        assert_eq!(score(&questions, &[1, 0, 0]).unwrap(), 0);
        assert_eq!(score(&questions, &[UNANSWERED, UNANSWERED, UNANSWERED]).unwrap(), 0);
        assert!(score(&questions, &[0]).is_err());
    }

    #[test]
    fn test_feedback_tiers() {
        let top = feedback(8, 10);
        assert_eq!(top.tier, FeedbackTier::Excellent);
        assert_eq!(top.badge.as_deref(), Some(HERO_BADGE));
        assert_eq!(feedback(7, 10).tier, FeedbackTier::Good);
        assert_eq!(feedback(5, 10).tier, FeedbackTier::Good);
        assert_eq!(feedback(4, 10).tier, FeedbackTier::KeepLearning);
        assert_eq!(feedback(1, 3).tier, FeedbackTier::KeepLearning);
        assert_eq!(feedback(0, 0).tier, FeedbackTier::KeepLearning);
    }

    #[test]
    fn test_badges() {
        assert_eq!(response_badge(10), ResponseBadge::Excellent);
        assert_eq!(response_badge(9), ResponseBadge::Excellent);
        assert_eq!(response_badge(8), ResponseBadge::Good);
        assert_eq!(response_badge(7), ResponseBadge::Good);
        assert_eq!(response_badge(5), ResponseBadge::Fair);
        assert_eq!(response_badge(4), ResponseBadge::NeedsImprovement);
    }

    #[test]
    fn test_stats() {
        assert_eq!(result_stats(&[]), QuizResultStats::default());

        let stats = result_stats(&[response(10), response(7), response(8)]);
        assert_eq!(stats.total_responses, 3);
        assert!((stats.average_score - 8.33).abs() < f64::EPSILON);
        assert_eq!(stats.highest_score, 10);
        assert_eq!(stats.lowest_score, 7);
        assert_eq!(stats.pass_count, 2);
    }
}
