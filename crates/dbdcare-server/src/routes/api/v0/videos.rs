use crate::permissions::Permission;
use crate::routes::api::v0::error::{ContentError, require, require_if_present};
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use dbdcare_core::filter::filter;
use dbdcare_core::media::youtube_id;
use dbdcare_db::video;
use dbdcare_model::filter::ListQuery;
use dbdcare_model::video::{NewVideo, UpdateVideo, Video};
use dbdcare_model_tools::convert::{IntoDbModel, IntoModel};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_videos).post(create_video))
        .route("/{video_id}", get(get_video).put(update_video).delete(delete_video))
        .route("/{video_id}/view", post(view_video))
        .with_state(())
}

fn extract_youtube_id(url: &str) -> Result<String, ContentError> {
    youtube_id(url).ok_or(ContentError::InvalidYoutubeUrl)
}

#[utoipa::path(
    get,
    path = "/api/v0/videos",
    params(ListQuery),
    responses(
        (status = OK, body = Vec<Video>, description = "Videos matching the filter, newest first"),
    ),
    tag = "v0/videos"
)]
pub(crate) async fn list_videos(
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ContentError> {
    let videos: Vec<Video> = video::Query::all(&conn)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(filter(videos, &query)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/videos/{video_id}",
    params(("video_id" = Uuid, Path, description = "Id of the video")),
    responses(
        (status = OK, body = Video),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/videos"
)]
pub(crate) async fn get_video(
    Extension(conn): Extension<DatabaseConnection>,
    Path(video_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    let video: Video = video::Query::find_by_id(&conn, video_id)
        .await?
        .ok_or(ContentError::NotFound("Video"))?
        .into_model();
    Ok(Json(video).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/videos/{video_id}/view",
    params(("video_id" = Uuid, Path, description = "Id of the video")),
    responses(
        (status = NO_CONTENT, description = "Play counted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/videos"
)]
pub(crate) async fn view_video(
    Extension(conn): Extension<DatabaseConnection>,
    Path(video_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !video::Mutation::increment_views(&conn, video_id).await? {
        return Err(ContentError::NotFound("Video"));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/videos",
    request_body = NewVideo,
    responses(
        (status = CREATED, body = Video),
        (status = BAD_REQUEST, body = ErrorBody, description = "Title missing or no video id in the url"),
    ),
    tag = "v0/videos",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_video(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new): Json<NewVideo>,
) -> Result<Response, ContentError> {
    require(&new.title, "Judul")?;
    require(&new.youtube_url, "URL YouTube")?;
    let youtube_id = extract_youtube_id(&new.youtube_url)?;

    let created = video::Mutation::create(&conn, (new, youtube_id).into_db_model()).await?;
    tracing::info!(admin = %user.username, video = %created.id, "created video");
    let created: Video = created.into_model();
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/v0/videos/{video_id}",
    params(("video_id" = Uuid, Path, description = "Id of the video")),
    request_body = UpdateVideo,
    responses(
        (status = OK, body = Video),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/videos",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn update_video(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(video_id): Path<Uuid>,
    Json(update): Json<UpdateVideo>,
) -> Result<Response, ContentError> {
    require_if_present(update.title.as_ref(), "Judul")?;
    let youtube_id = update.youtube_url.as_deref().map(extract_youtube_id).transpose()?;

    if video::Query::find_by_id(&conn, video_id).await?.is_none() {
        return Err(ContentError::NotFound("Video"));
    }
    let updated = video::Mutation::update(&conn, video_id, (update, youtube_id).into_db_model()).await?;
    let updated: Video = updated.into_model();
    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v0/videos/{video_id}",
    params(("video_id" = Uuid, Path, description = "Id of the video")),
    responses(
        (status = NO_CONTENT, description = "Video deleted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/videos",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_video(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(video_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !video::Mutation::delete(&conn, video_id).await? {
        return Err(ContentError::NotFound("Video"));
    }
    tracing::info!(admin = %user.username, video = %video_id, "deleted video");
    Ok(StatusCode::NO_CONTENT.into_response())
}
