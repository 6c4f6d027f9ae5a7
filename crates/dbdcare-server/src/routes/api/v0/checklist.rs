use crate::permissions::Permission;
use crate::routes::api::v0::error::{ContentError, require, require_if_present};
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use dbdcare_core::checklist::{RawChecklistItem, normalize_items, resolve_items};
use dbdcare_db::checklist;
use dbdcare_model::checklist::{ChecklistItem, NewChecklistItem, UpdateChecklistItem};
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
        .route("/", get(list_items).post(create_item))
        .route("/{item_id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(())
}

async fn stored_items(conn: &DatabaseConnection) -> Result<Vec<RawChecklistItem>, ContentError> {
    Ok(checklist::Query::all(conn)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect())
}

/// One stored item as it appears in the list. Defaults depend on the item's position among all
/// stored items, so the whole list is normalized.
async fn normalized_item(conn: &DatabaseConnection, item_id: Uuid) -> Result<ChecklistItem, ContentError> {
    let id = item_id.to_string();
    normalize_items(stored_items(conn).await?)
        .into_iter()
        .find(|item| item.id == id)
        .ok_or(ContentError::NotFound("Checklist"))
}

#[utoipa::path(
    get,
    path = "/api/v0/checklist",
    responses(
        (status = OK, body = Vec<ChecklistItem>, description = "Stored items ordered by `order`, the built-in list when nothing is stored"),
    ),
    tag = "v0/checklist"
)]
pub(crate) async fn list_items(Extension(conn): Extension<DatabaseConnection>) -> Result<Response, ContentError> {
    Ok(Json(resolve_items(Some(stored_items(&conn).await?))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/checklist/{item_id}",
    params(("item_id" = Uuid, Path, description = "Id of the checklist item")),
    responses(
        (status = OK, body = ChecklistItem),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/checklist"
)]
pub(crate) async fn get_item(
    Extension(conn): Extension<DatabaseConnection>,
    Path(item_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    Ok(Json(normalized_item(&conn, item_id).await?).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/checklist",
    request_body = NewChecklistItem,
    responses(
        (status = CREATED, body = ChecklistItem),
        (status = BAD_REQUEST, body = ErrorBody, description = "Title missing"),
    ),
    tag = "v0/checklist",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_item(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new): Json<NewChecklistItem>,
) -> Result<Response, ContentError> {
    require(&new.title, "Judul")?;

    let created = checklist::Mutation::create(&conn, new.into_db_model()).await?;
    Ok((StatusCode::CREATED, Json(normalized_item(&conn, created.id).await?)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/v0/checklist/{item_id}",
    params(("item_id" = Uuid, Path, description = "Id of the checklist item")),
    request_body = UpdateChecklistItem,
    responses(
        (status = OK, body = ChecklistItem),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/checklist",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn update_item(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(item_id): Path<Uuid>,
    Json(update): Json<UpdateChecklistItem>,
) -> Result<Response, ContentError> {
    require_if_present(update.title.as_ref(), "Judul")?;

    if checklist::Query::find_by_id(&conn, item_id).await?.is_none() {
        return Err(ContentError::NotFound("Checklist"));
    }
    checklist::Mutation::update(&conn, item_id, update.into_db_model()).await?;
    Ok(Json(normalized_item(&conn, item_id).await?).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v0/checklist/{item_id}",
    params(("item_id" = Uuid, Path, description = "Id of the checklist item")),
    responses(
        (status = NO_CONTENT, description = "Item deleted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/checklist",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_item(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(item_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !checklist::Mutation::delete(&conn, item_id).await? {
        return Err(ContentError::NotFound("Checklist"));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
