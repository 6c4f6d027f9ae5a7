use crate::routes::api::v0::error::ContentError;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use dbdcare_db::{material, video};
use dbdcare_model::home::Home;
use dbdcare_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use tokio::try_join;

const LATEST_MATERIALS: u64 = 3;
const POPULAR_VIDEOS: u64 = 3;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_home)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/home",
    responses(
        (status = OK, body = Home, description = "Newest materials and most watched videos"),
    ),
    tag = "v0/home"
)]
pub(crate) async fn get_home(Extension(conn): Extension<DatabaseConnection>) -> Result<Response, ContentError> {
    let (materials, videos) = try_join!(
        material::Query::latest(&conn, LATEST_MATERIALS),
        video::Query::popular(&conn, POPULAR_VIDEOS),
    )?;

    Ok(Json(Home {
        latest_materials: materials.into_iter().map(IntoModel::into_model).collect(),
        popular_videos: videos.into_iter().map(IntoModel::into_model).collect(),
    })
    .into_response())
}
