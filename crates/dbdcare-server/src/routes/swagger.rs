use super::api;
use super::login;

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::home::get_home,
        api::v0::materials::list_materials,
        api::v0::materials::get_material,
        api::v0::materials::view_material,
        api::v0::materials::create_material,
        api::v0::materials::update_material,
        api::v0::materials::delete_material,
        api::v0::comments::list_comments,
        api::v0::comments::create_comment,
        api::v0::comments::delete_comment,
        api::v0::posters::list_posters,
        api::v0::posters::get_poster,
        api::v0::posters::download_poster,
        api::v0::posters::create_poster,
        api::v0::posters::update_poster,
        api::v0::posters::delete_poster,
        api::v0::leaflets::list_leaflets,
        api::v0::leaflets::get_leaflet,
        api::v0::leaflets::download_leaflet,
        api::v0::leaflets::create_leaflet,
        api::v0::leaflets::update_leaflet,
        api::v0::leaflets::delete_leaflet,
        api::v0::videos::list_videos,
        api::v0::videos::get_video,
        api::v0::videos::view_video,
        api::v0::videos::create_video,
        api::v0::videos::update_video,
        api::v0::videos::delete_video,
        api::v0::quiz::get_quiz,
        api::v0::quiz::update_quiz,
        api::v0::quiz::submit_response,
        api::v0::quiz::list_responses,
        api::v0::quiz::delete_response,
        api::v0::checklist::list_items,
        api::v0::checklist::get_item,
        api::v0::checklist::create_item,
        api::v0::checklist::update_item,
        api::v0::checklist::delete_item,
        api::v0::activity::log_activity,
        api::v0::admin::get_dashboard,
        api::v0::admin::get_analytics,
        api::v0::maintenance::clear,
        api::v0::maintenance::seed,
        login::register,
        login::login,
        login::logout,
        login::whoami,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Token returned by /api/v0/auth/login"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v0/materials/{material_id}"));
        assert!(doc.paths.paths.contains_key("/api/v0/auth/login"));
        let schemes = &doc.components.expect("components").security_schemes;
        assert!(schemes.contains_key("token"));
    }
}
