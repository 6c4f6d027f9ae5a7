use crate::permissions::extract;
use crate::{AppConfig, routes};
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{HeaderName, HeaderValue, Method, header};
use protect_axum::GrantsLayer;
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

fn cors(origins: &[HeaderValue], methods: &[Method], headers: &[HeaderName]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins.to_vec())
        .allow_methods(methods.to_vec())
        .allow_headers(headers.to_vec())
        .max_age(CORS_MAX_AGE)
}

/// All routes with their extensions and auth layers, without the metrics endpoint.
pub(crate) fn create_router(
    app_config: AppConfig,
    origins: &[String],
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    // no credentials exist yet while logging in or registering
    let auth_cors = cors(
        &origins,
        &[Method::GET, Method::POST, Method::OPTIONS],
        &[header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN],
    );
    let api_cors = cors(
        &origins,
        &[Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS],
        &[header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN],
    );

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/auth", routes::login::create_router().layer(auth_cors))
                .merge(
                    Router::new()
                        .nest("/status", routes::api::v0::status::create_router())
                        .nest("/home", routes::api::v0::home::create_router())
                        .nest("/materials", routes::api::v0::materials::create_router())
                        .nest("/comments", routes::api::v0::comments::create_router())
                        .nest("/posters", routes::api::v0::posters::create_router())
                        .nest("/leaflets", routes::api::v0::leaflets::create_router())
                        .nest("/videos", routes::api::v0::videos::create_router())
                        .nest("/quiz", routes::api::v0::quiz::create_router())
                        .nest("/checklist", routes::api::v0::checklist::create_router())
                        .nest("/activity", routes::api::v0::activity::create_router())
                        .nest("/admin", routes::api::v0::admin::create_router())
                        .nest("/maintenance", routes::api::v0::maintenance::create_router())
                        .layer(api_cors),
                ),
        )
        .layer(
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(Extension(app_config))
                .layer(Extension(seaorm_pool))
                .layer(GrantsLayer::with_extractor(extract)),
        )
        .with_state(());
    Ok(app)
}

pub(crate) fn create_app(
    app_config: AppConfig,
    origins: &[String],
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    if origins.is_empty() {
        tracing::warn!("no cors origins configured, browsers on other origins are rejected");
    } else {
        tracing::info!(?origins, "allowing origins");
    }

    let app = create_router(app_config, origins, seaorm_pool)?
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);
    Ok(app)
}
