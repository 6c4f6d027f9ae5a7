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
        .route("/", get(list_leaflets).post(create_leaflet))
        .route(
            "/{leaflet_id}",
            get(get_leaflet).put(update_leaflet).delete(delete_leaflet),
        )
        .route("/{leaflet_id}/download", post(download_leaflet))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/leaflets",
    params(ListQuery),
    responses(
        (status = OK, body = Vec<Document>, description = "Leaflets matching the filter, newest first"),
    ),
    tag = "v0/leaflets"
)]
pub(crate) async fn list_leaflets(
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ContentError> {
    documents::list(Collection::Leaflet, &conn, &query).await
}

#[utoipa::path(
    get,
    path = "/api/v0/leaflets/{leaflet_id}",
    params(("leaflet_id" = Uuid, Path, description = "Id of the leaflet")),
    responses(
        (status = OK, body = Document),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/leaflets"
)]
pub(crate) async fn get_leaflet(
    Extension(conn): Extension<DatabaseConnection>,
    Path(leaflet_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    documents::get(Collection::Leaflet, &conn, leaflet_id).await
}

#[utoipa::path(
    post,
    path = "/api/v0/leaflets/{leaflet_id}/download",
    params(("leaflet_id" = Uuid, Path, description = "Id of the leaflet")),
    responses(
        (status = NO_CONTENT, description = "Download counted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/leaflets"
)]
pub(crate) async fn download_leaflet(
    Extension(conn): Extension<DatabaseConnection>,
    Path(leaflet_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    documents::download(Collection::Leaflet, &conn, leaflet_id).await
}

#[utoipa::path(
    post,
    path = "/api/v0/leaflets",
    request_body = NewDocument,
    responses(
        (status = CREATED, body = Document),
        (status = BAD_REQUEST, body = ErrorBody, description = "Title or file url missing"),
    ),
    tag = "v0/leaflets",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_leaflet(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new): Json<NewDocument>,
) -> Result<Response, ContentError> {
    documents::create(Collection::Leaflet, &conn, new).await
}

#[utoipa::path(
    put,
    path = "/api/v0/leaflets/{leaflet_id}",
    params(("leaflet_id" = Uuid, Path, description = "Id of the leaflet")),
    request_body = UpdateDocument,
    responses(
        (status = OK, body = Document),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/leaflets",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn update_leaflet(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(leaflet_id): Path<Uuid>,
    Json(update): Json<UpdateDocument>,
) -> Result<Response, ContentError> {
    documents::update(Collection::Leaflet, &conn, leaflet_id, update).await
}

#[utoipa::path(
    delete,
    path = "/api/v0/leaflets/{leaflet_id}",
    params(("leaflet_id" = Uuid, Path, description = "Id of the leaflet")),
    responses(
        (status = NO_CONTENT, description = "Leaflet deleted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/leaflets",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_leaflet(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(leaflet_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    documents::delete(Collection::Leaflet, &conn, leaflet_id).await
}
