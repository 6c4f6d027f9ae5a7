use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use dbdcare_core::status::get_sea_orm_db_status;
use dbdcare_model::status::Status;
use http::StatusCode;
use sea_orm::DatabaseConnection;
use tracing::instrument;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server and database are reachable", body = Status),
        (status = INTERNAL_SERVER_ERROR, description = "Database check failed, `database` holds the reason", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    let database = get_sea_orm_db_status(&conn, None).await;
    let code = if database.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (code, Json(Status::new(&database, env!("CARGO_PKG_VERSION"))))
}
