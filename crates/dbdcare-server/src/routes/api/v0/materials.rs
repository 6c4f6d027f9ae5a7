use crate::permissions::Permission;
use crate::routes::api::v0::comments;
use crate::routes::api::v0::error::{ContentError, require, require_if_present};
use crate::routes::error::ErrorBody;
use crate::user::ExtractUser;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use dbdcare_core::filter::filter;
use dbdcare_db::material;
use dbdcare_model::filter::ListQuery;
use dbdcare_model::material::{Material, MaterialDetail, NewMaterial, UpdateMaterial};
use dbdcare_model_tools::convert::{IntoDbModel, IntoModel};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

const RELATED_LIMIT: u64 = 3;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route(
            "/{material_id}",
            get(get_material).put(update_material).delete(delete_material),
        )
        .route("/{material_id}/view", post(view_material))
        .route(
            "/{material_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/materials",
    params(ListQuery),
    responses(
        (status = OK, body = Vec<Material>, description = "Materials matching the filter, newest first"),
    ),
    tag = "v0/materials"
)]
pub(crate) async fn list_materials(
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ContentError> {
    let materials: Vec<Material> = material::Query::all(&conn)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(filter(materials, &query)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/materials/{material_id}",
    params(("material_id" = Uuid, Path, description = "Id of the material")),
    responses(
        (status = OK, body = MaterialDetail, description = "The material and related materials of its category. Counts as a view."),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/materials"
)]
pub(crate) async fn get_material(
    Extension(conn): Extension<DatabaseConnection>,
    Path(material_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !material::Mutation::increment_views(&conn, material_id).await? {
        return Err(ContentError::NotFound("Materi"));
    }
    let model = material::Query::find_by_id(&conn, material_id)
        .await?
        .ok_or(ContentError::NotFound("Materi"))?;
    let related = material::Query::related(&conn, &model, RELATED_LIMIT)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();

    Ok(Json(MaterialDetail {
        material: model.into_model(),
        related,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/materials/{material_id}/view",
    params(("material_id" = Uuid, Path, description = "Id of the material")),
    responses(
        (status = NO_CONTENT, description = "View counted"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/materials"
)]
pub(crate) async fn view_material(
    Extension(conn): Extension<DatabaseConnection>,
    Path(material_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !material::Mutation::increment_views(&conn, material_id).await? {
        return Err(ContentError::NotFound("Materi"));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/materials",
    request_body = NewMaterial,
    responses(
        (status = CREATED, body = Material),
        (status = BAD_REQUEST, body = ErrorBody, description = "Title or content missing"),
    ),
    tag = "v0/materials",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_material(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new): Json<NewMaterial>,
) -> Result<Response, ContentError> {
    require(&new.title, "Judul")?;
    require(&new.content, "Konten")?;

    let created = material::Mutation::create(&conn, new.into_db_model()).await?;
    tracing::info!(admin = %user.username, material = %created.id, "created material");
    let created: Material = created.into_model();
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/v0/materials/{material_id}",
    params(("material_id" = Uuid, Path, description = "Id of the material")),
    request_body = UpdateMaterial,
    responses(
        (status = OK, body = Material),
        (status = BAD_REQUEST, body = ErrorBody),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/materials",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn update_material(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(material_id): Path<Uuid>,
    Json(update): Json<UpdateMaterial>,
) -> Result<Response, ContentError> {
    require_if_present(update.title.as_ref(), "Judul")?;
    require_if_present(update.content.as_ref(), "Konten")?;

    if material::Query::find_by_id(&conn, material_id).await?.is_none() {
        return Err(ContentError::NotFound("Materi"));
    }
    let updated = material::Mutation::update(&conn, material_id, update.into_db_model()).await?;
    let updated: Material = updated.into_model();
    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v0/materials/{material_id}",
    params(("material_id" = Uuid, Path, description = "Id of the material")),
    responses(
        (status = NO_CONTENT, description = "Material deleted, its comments are kept"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    tag = "v0/materials",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_material(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(material_id): Path<Uuid>,
) -> Result<Response, ContentError> {
    if !material::Mutation::delete(&conn, material_id).await? {
        return Err(ContentError::NotFound("Materi"));
    }
    tracing::info!(admin = %user.username, material = %material_id, "deleted material");
    Ok(StatusCode::NO_CONTENT.into_response())
}
