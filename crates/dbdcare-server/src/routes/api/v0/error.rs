use crate::routes::error::{GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors of the content collections, shared because they follow one CRUD contract.
#[derive(Error, Debug)]
pub(crate) enum ContentError {
    #[error("{0} tidak ditemukan")]
    NotFound(&'static str),

    #[error("{0} wajib diisi")]
    MissingField(&'static str),

    #[error("URL YouTube tidak valid")]
    InvalidYoutubeUrl,

    #[error(transparent)]
    SeaOrmError(DbErr),
}

impl From<DbErr> for ContentError {
    fn from(error: DbErr) -> Self {
        match error {
            DbErr::RecordNotUpdated => Self::NotFound("Data"),
            error => Self::SeaOrmError(error),
        }
    }
}

impl GetStatusCode for ContentError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingField(_) | Self::InvalidYoutubeUrl => StatusCode::BAD_REQUEST,
            Self::SeaOrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

/// Rejects blank values of a required field.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::MissingField(field));
    }
    Ok(())
}

/// Like [`require`], for a field that may be left out of an update.
pub(crate) fn require_if_present(value: Option<&String>, field: &'static str) -> Result<(), ContentError> {
    value.map_or(Ok(()), |value| require(value, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("Mengenal DBD", "Judul").is_ok());
        let error = require("  ", "Judul").unwrap_err();
        assert_eq!(error.to_string(), "Judul wajib diisi");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(require_if_present(None, "Judul").is_ok());
        assert!(require_if_present(Some(&String::new()), "Judul").is_err());
    }

    #[test]
    fn test_record_not_updated_is_not_found() {
        let error: ContentError = DbErr::RecordNotUpdated.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
