use crate::routes::error::{GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AdminError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),
}

impl GetStatusCode for AdminError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::SeaOrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
