use crate::permissions::Permission;
use crate::routes::api::v0::activity::error::ActivityError;
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use dbdcare_db::activity_log;
use dbdcare_model::activity::{Action, Activity, NewActivity};
use dbdcare_model_tools::convert::{IntoDbModel, IntoModel};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde_json::Value;
use std::error::Error;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", post(log_activity)).with_state(())
}

/// Appends an activity entry. Failures are logged and otherwise ignored.
pub(crate) async fn record<C: ConnectionTrait>(
    conn: &C,
    username: String,
    action: Action,
    target: &str,
    target_id: Option<String>,
    metadata: Option<Value>,
) {
    if let Err(error) = activity_log::Mutation::create(
        conn,
        username,
        action.into_db_model(),
        target.to_owned(),
        target_id,
        metadata,
    )
    .await
    {
        tracing::error!(error = &error as &dyn Error, action = %action, "failed to log activity");
    }
}

#[utoipa::path(
    post,
    path = "/api/v0/activity",
    request_body = NewActivity,
    responses(
        (status = CREATED, body = Activity),
        (status = BAD_REQUEST, body = ErrorBody, description = "Target missing"),
    ),
    tag = "v0/activity",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn log_activity(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(activity): Json<NewActivity>,
) -> Result<Response, ActivityError> {
    if activity.target.trim().is_empty() {
        return Err(ActivityError::MissingTarget);
    }
    let created = activity_log::Mutation::create(
        &conn,
        user.username,
        activity.action.into_db_model(),
        activity.target,
        activity.target_id,
        activity.metadata.map(Value::Object),
    )
    .await?;
    let created: Activity = created.into_model();
    Ok((StatusCode::CREATED, Json(created)).into_response())
}
