use crate::permissions::Permission;
use crate::routes::api::v0::documents::{self, Collection};
use crate::routes::api::v0::error::ContentError;
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::extract::{Path, Query};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use dbdcare_model::document::{Document, NewDocument, UpdateDocument};
use dbdcare_model::filter::ListQuery;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_posters).post(create_poster))
        .route(
            "/{poster_id}",
            get(get_poster).put(update_poster).delete(delete_poster),
        )
        .route("/{poster_id}/download", post(download_poster))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/posters",
    params(ListQuery),
    responses(
        (status = OK, body = Vec<Document>, description = "Posters matching the filter, newest first"),
    ),
    tag = "v0/posters"
)]
pub(crate) async fn list_posters(
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ContentError> {
    documents::list(Collection::Poster, &conn, &query).await
}

#[utoipa::path(
    get,
    path = "/api/v0/posters/{poster_id}",
    params(("poster_id" = Uuid, Path, description = "Id of the poster")),
    responses(
        (status = OK, body = Document),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/posters"
)]
pub(crate) async fn get_poster(
    Extension(conn): Extension<DatabaseConnection>,
    Path(poster_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    documents::get(Collection::Poster, &conn, poster_id).await
}

#[utoipa::path(
    post,
    path = "/api/v0/posters/{poster_id}/download",
    params(("poster_id" = Uuid, Path, description = "Id of the poster")),
    responses(
        (status = NO_CONTENT, description = "Download counted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/posters"
)]
pub(crate) async fn download_poster(
    Extension(conn): Extension<DatabaseConnection>,
    Path(poster_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    documents::download(Collection::Poster, &conn, poster_id).await
}

#[utoipa::path(
    post,
    path = "/api/v0/posters",
    request_body = NewDocument,
    responses(
        (status = CREATED, body = Document),
        (status = BAD_REQUEST, body = ErrorBody, description = "Title or file url missing"),
    ),
    tag = "v0/posters",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_poster(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new): Json<NewDocument>,
) -> Result<Response, ContentError> {
    documents::create(Collection::Poster, &conn, new).await
}

#[utoipa::path(
    put,
    path = "/api/v0/posters/{poster_id}",
    params(("poster_id" = Uuid, Path, description = "Id of the poster")),
    request_body = UpdateDocument,
    responses(
        (status = OK, body = Document),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/posters",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn update_poster(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(poster_id): Path<Uuid>,
    Json(update): Json<UpdateDocument>,
) -> Result<Response, ContentError> {
    documents::update(Collection::Poster, &conn, poster_id, update).await
}

#[utoipa::path(
    delete,
    path = "/api/v0/posters/{poster_id}",
    params(("poster_id" = Uuid, Path, description = "Id of the poster")),
    responses(
        (status = NO_CONTENT, description = "Poster deleted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/posters",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_poster(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(poster_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    documents::delete(Collection::Poster, &conn, poster_id).await
}
