use crate::permissions::Permission;
use crate::routes::api::v0::error::{ContentError, require};
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::delete;
use axum::{Extension, Json, Router};
use dbdcare_db::{comment, material};
use dbdcare_model::comment::{Comment, NewComment};
use dbdcare_model_tools::convert::IntoModel;
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/{comment_id}", delete(delete_comment))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/materials/{material_id}/comments",
    params(("material_id" = Uuid, Path, description = "Id of the material")),
    responses(
        (status = OK, body = Vec<Comment>, description = "Comments on the material, newest first"),
    ),
    tag = "v0/comments"
)]
pub(crate) async fn list_comments(
    Extension(conn): Extension<DatabaseConnection>,
    Path(material_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    let comments: Vec<Comment> = comment::Query::for_material(&conn, material_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(comments).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/materials/{material_id}/comments",
    params(("material_id" = Uuid, Path, description = "Id of the material")),
    request_body = NewComment,
    responses(
        (status = CREATED, body = Comment),
        (status = BAD_REQUEST, body = ErrorBody, description = "Empty comment"),
        (status = NOT_FOUND, body = ErrorBody, description = "Unknown material"),
    ),
    tag = "v0/comments",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn create_comment(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(material_id): Path<Uuid>,
    Json(new): Json<NewComment>,
) -> Result<Response, ContentError> {
    let content = new.content.trim();
    require(content, "Komentar")?;

    if material::Query::find_by_id(&conn, material_id).await?.is_none() {
        return Err(ContentError::NotFound("Materi"));
    }
    let created = comment::Mutation::create(&conn, material_id, user.username, content.to_owned()).await?;
    let created: Comment = created.into_model();
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v0/comments/{comment_id}",
    params(("comment_id" = Uuid, Path, description = "Id of the comment")),
    responses(
        (status = NO_CONTENT, description = "Comment deleted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/comments",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_comment(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(comment_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !comment::Mutation::delete(&conn, comment_id).await? {
        return Err(ContentError::NotFound("Komentar"));
    }
    tracing::info!(admin = %user.username, comment = %comment_id, "deleted comment");
    Ok(StatusCode::NO_CONTENT.into_response())
}
