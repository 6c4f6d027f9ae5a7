use crate::convert::{FromModel, TryFromDbModel};
use crate::error::Error;
use dbdcare_core::quiz::response_badge;
use dbdcare_entity::quiz_question::{ActiveModel as QuestionActiveModel, Model as QuestionModel};
use dbdcare_entity::quiz_response::Model as ResponseModel;
use dbdcare_model::quiz::{QuizQuestion, QuizResponse};
use sea_orm::ActiveValue::{NotSet, Set};
use serde_json::json;

impl TryFromDbModel<QuestionModel> for QuizQuestion {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            question: model.question,
            options: serde_json::from_value(model.options)?,
            correct_answer: model.correct_answer,
            explanation: model.explanation,
        })
    }
}

/// `id` and `position` are assigned when the quiz is stored.
impl FromModel<QuizQuestion> for QuestionActiveModel {
    fn from_model(model: QuizQuestion) -> Self {
        Self {
            id: NotSet,
            position: NotSet,
            question: Set(model.question),
            options: Set(json!(model.options)),
            correct_answer: Set(model.correct_answer),
            explanation: Set(model.explanation),
        }
    }
}

impl TryFromDbModel<ResponseModel> for QuizResponse {
    type Error = Error;

    fn try_from_db_model(model: ResponseModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            badge: response_badge(model.score),
            username: model.username,
            score: model.score,
            answers: serde_json::from_value(model.answers)?,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TryIntoModel;
    use dbdcare_model::quiz::ResponseBadge;

    #[test]
    fn test_question_options_from_json() {
        let model = QuestionModel {
            id: uuid::Uuid::new_v4(),
            position: 0,
            question: "Q".to_owned(),
            options: json!(["A", "B"]),
            correct_answer: 1,
            explanation: "E".to_owned(),
        };
        let question: QuizQuestion = model.try_into_model().unwrap();
        assert_eq!(question.options, vec!["A", "B"]);
    }

    #[test]
    fn test_malformed_options() {
        let model = QuestionModel {
            id: uuid::Uuid::new_v4(),
            position: 0,
            question: "Q".to_owned(),
            options: json!({"a": 1}),
            correct_answer: 0,
            explanation: String::new(),
        };
        let question: Result<QuizQuestion, _> = model.try_into_model();
        assert!(question.is_err());
    }

    #[test]
    fn test_response_badge() {
        let model = ResponseModel {
            id: uuid::Uuid::new_v4(),
            username: "budi".to_owned(),
            score: 9,
            answers: json!([0, 1, -1]),
            created_at: chrono::NaiveDateTime::default(),
        };
        let response: QuizResponse = model.try_into_model().unwrap();
        assert_eq!(response.badge, ResponseBadge::Excellent);
        assert_eq!(response.answers, vec![0, 1, -1]);
    }
}
