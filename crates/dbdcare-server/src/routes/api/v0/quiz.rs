use crate::permissions::Permission;
use crate::routes::api::v0::activity;
use crate::routes::api::v0::quiz::error::QuizRouteError;
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Extension, Json, Router};
use dbdcare_core::quiz::{QuizError, default_questions, feedback, normalize_question, percentage, result_stats, score};
use dbdcare_db::{quiz, quiz_response};
use dbdcare_model::activity::Action;
use dbdcare_model::quiz::{Quiz, QuizQuestion, QuizResponse, QuizResult, QuizResults, QuizSubmission, UNANSWERED};
use dbdcare_model_tools::convert::{IntoDbModel, TryIntoModel};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_quiz).put(update_quiz))
        .nest(
            "/responses",
            Router::new()
                .route("/", get(list_responses).post(submit_response))
                .route("/{response_id}", delete(delete_response)),
        )
        .with_state(())
}

/// The stored quiz, or the built-in questions while none are stored.
async fn load_questions(conn: &DatabaseConnection) -> Result<Vec<QuizQuestion>, QuizRouteError> {
    let questions = quiz::Query::questions(conn)
        .await?
        .into_iter()
        .map(TryIntoModel::try_into_model)
        .collect::<Result<Vec<QuizQuestion>, _>>()?;
    if questions.is_empty() {
        return Ok(default_questions());
    }
    Ok(questions)
}

fn check_answers(questions: &[QuizQuestion], answers: &[i32]) -> Result<(), QuizRouteError> {
    for (index, (question, &answer)) in questions.iter().zip(answers).enumerate() {
        let options = i32::try_from(question.options.len()).unwrap_or(i32::MAX);
        if answer != UNANSWERED && !(0..options).contains(&answer) {
            return Err(QuizRouteError::InvalidAnswer { question: index + 1 });
        }
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/v0/quiz",
    responses(
        (status = OK, body = Quiz, description = "All questions in order, with answers and explanations"),
    ),
    tag = "v0/quiz"
)]
pub(crate) async fn get_quiz(Extension(conn): Extension<DatabaseConnection>) -> Result<Response, QuizRouteError> {
    let questions = load_questions(&conn).await?;
    Ok(Json(Quiz { questions }).into_response())
}

#[utoipa::path(
    put,
    path = "/api/v0/quiz",
    request_body = Quiz,
    responses(
        (status = OK, body = Quiz, description = "The stored quiz. Every question has two options and a valid answer."),
        (status = BAD_REQUEST, body = ErrorBody, description = "No questions or a question without text"),
    ),
    tag = "v0/quiz",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn update_quiz(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(quiz): Json<Quiz>,
) -> Result<Response, QuizRouteError> {
    if quiz.questions.is_empty() {
        return Err(QuizError::Empty.into());
    }
    if let Some(index) = quiz.questions.iter().position(|q| q.question.trim().is_empty()) {
        return Err(QuizRouteError::EmptyQuestion(index + 1));
    }

    let questions: Vec<QuizQuestion> = quiz.questions.into_iter().map(normalize_question).collect();
    quiz::Mutation::replace_questions(&conn, questions.iter().cloned().map(IntoDbModel::into_db_model).collect())
        .await?;
    tracing::info!(admin = %user.username, questions = questions.len(), "replaced quiz");

    Ok(Json(Quiz { questions }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/quiz/responses",
    request_body = QuizSubmission,
    responses(
        (status = OK, body = QuizResult, description = "Score of the stored attempt"),
        (status = BAD_REQUEST, body = ErrorBody, description = "Answer count or an answer index does not fit the quiz"),
    ),
    tag = "v0/quiz",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn submit_response(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(submission): Json<QuizSubmission>,
) -> Result<Response, QuizRouteError> {
    let questions = load_questions(&conn).await?;
    let score = score(&questions, &submission.answers)?;
    check_answers(&questions, &submission.answers)?;

    let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
    let percentage = percentage(score, total);
    let stored_score = i32::try_from(score).unwrap_or(i32::MAX);
    let response =
        quiz_response::Mutation::create(&conn, user.username.clone(), stored_score, &submission.answers).await?;

    activity::record(
        &conn,
        user.username,
        Action::QuizComplete,
        "quiz",
        Some(response.id.to_string()),
        Some(json!({ "score": score, "total": total, "percentage": percentage })),
    )
    .await;

    Ok(Json(QuizResult {
        score,
        total,
        percentage,
        feedback: feedback(score, total),
        response_id: Some(response.id),
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/quiz/responses",
    responses(
        (status = OK, body = QuizResults, description = "All responses, newest first, with summary statistics"),
    ),
    tag = "v0/quiz",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn list_responses(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, QuizRouteError> {
    let responses = quiz_response::Query::all(&conn)
        .await?
        .into_iter()
        .map(TryIntoModel::try_into_model)
        .collect::<Result<Vec<QuizResponse>, _>>()?;

    Ok(Json(QuizResults {
        stats: result_stats(&responses),
        responses,
    })
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v0/quiz/responses/{response_id}",
    params(("response_id" = Uuid, Path, description = "Id of the response")),
    responses(
        (status = NO_CONTENT, description = "Response deleted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/quiz",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_response(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(response_id): Path<Uuid>,
) -> Result<Response, QuizRouteError> {
    if !quiz_response::Mutation::delete(&conn, response_id).await? {
        return Err(QuizRouteError::ResponseNotFound);
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_answers() {
        let questions = default_questions();
        let mut answers = vec![UNANSWERED; questions.len()];
        assert!(check_answers(&questions, &answers).is_ok());
        answers[0] = 1;
        assert!(check_answers(&questions, &answers).is_ok());
        answers[3] = 2;
        assert!(matches!(
            check_answers(&questions, &answers),
            Err(QuizRouteError::InvalidAnswer { question: 4 })
        ));
        answers[3] = -2;
        assert!(check_answers(&questions, &answers).is_err());
    }
}
