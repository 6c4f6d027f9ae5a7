use crate::routes::error::{GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ActivityError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("Target aktivitas wajib diisi")]
    MissingTarget,
}

impl GetStatusCode for ActivityError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingTarget => StatusCode::BAD_REQUEST,
            Self::SeaOrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
