//! Bulk operations on the content collections. Both require an admin.

use crate::AppConfig;
use crate::db::sea_orm::maintenance::{clear_content, seed_content};
use crate::permissions::Permission;
use crate::routes::api::v0::admin::error::AdminError;
use crate::user::ExtractUser;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use dbdcare_model::maintenance::{ClearReport, SeedReport};
use protect_axum::protect;
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/clear", post(clear))
        .route("/seed", post(seed))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/api/v0/maintenance/clear",
    responses(
        (status = OK, body = ClearReport, description = "Number of deleted rows per collection. Users, quiz questions and checklist items are kept."),
    ),
    tag = "v0/maintenance",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn clear(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, AdminError> {
    let report = clear_content(&conn).await?;
    tracing::warn!(admin = %user.username, total = report.total, "cleared content");

    Ok(Json(report).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/maintenance/seed",
    responses(
        (status = OK, body = SeedReport, description = "Created, skipped and failed items per collection. Items whose title exists are skipped."),
    ),
    tag = "v0/maintenance",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn seed(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
) -> Result<Response, AdminError> {
    let report = seed_content(&conn, app_config.seed()).await;
    tracing::info!(
        admin = %user.username,
        success = report.total.success,
        skipped = report.total.skipped,
        failed = report.total.failed,
        "seeded content"
    );

    Ok(Json(report).into_response())
}
