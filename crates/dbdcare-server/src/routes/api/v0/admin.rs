use crate::permissions::Permission;
use crate::routes::api::v0::admin::error::AdminError;
use crate::user::ExtractUser;
use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use dbdcare_core::analytics::{aggregate, range_start};
use dbdcare_db::{activity_log, comment, leaflet, material, poster, user, video};
use dbdcare_model::activity::Activity;
use dbdcare_model::analytics::{Analytics, AnalyticsQuery, Dashboard, DashboardCounts};
use dbdcare_model_tools::convert::IntoModel;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use tokio::try_join;

pub(crate) mod error;

const RECENT_COMMENTS: u64 = 5;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/analytics", get(get_analytics))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/dashboard",
    responses(
        (status = OK, body = Dashboard, description = "Collection counts, total views and the latest comments"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn get_dashboard(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, AdminError> {
    let (materials, posters, leaflets, videos, users, comments) = try_join!(
        material::Query::count(&conn),
        poster::Query::count(&conn),
        leaflet::Query::count(&conn),
        video::Query::count(&conn),
        user::Query::count(&conn),
        comment::Query::count(&conn),
    )?;
    let (material_views, video_views, recent_comments) = try_join!(
        material::Query::total_views(&conn),
        video::Query::total_views(&conn),
        comment::Query::recent(&conn, RECENT_COMMENTS),
    )?;

    Ok(Json(Dashboard {
        counts: DashboardCounts {
            materials,
            posters,
            leaflets,
            videos,
            users,
            comments,
            total_views: material_views + video_views,
        },
        recent_comments: recent_comments.into_iter().map(IntoModel::into_model).collect(),
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/analytics",
    params(AnalyticsQuery),
    responses(
        (status = OK, body = Analytics, description = "Per user activity and totals inside the range"),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn get_analytics(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Response, AdminError> {
    let now = chrono::Utc::now().naive_utc();
    let (activities, total_users) = try_join!(
        activity_log::Query::since(&conn, range_start(query.range, now)),
        user::Query::count(&conn),
    )?;
    let activities: Vec<Activity> = activities.into_iter().map(IntoModel::into_model).collect();

    Ok(Json(aggregate(query.range, activities, total_users, now)).into_response())
}
