use crate::db::sea_orm::user::RegistrationError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use dbdcare_core::password::PasswordError;
use dbdcare_core::validation::ValidationError;
use http::StatusCode;
use sea_orm::DbErr;
use serde_derive::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    #[schema(example = "Judul wajib diisi")]
    pub(crate) error: Cow<'static, str>,
}

impl ErrorBody {
    pub fn new<A: Into<Cow<'static, str>>>(error: A) -> Self {
        Self { error: error.into() }
    }
}

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> StatusCode;
}

/// Client errors carry their message, server errors are logged and answered generically.
pub(crate) fn error_to_axum_response<T>(error: T) -> Response
where
    T: GetStatusCode + Error + 'static,
{
    let status_code = error.status_code();
    if status_code.is_server_error() {
        tracing::error!(error = &error as &dyn Error, %status_code, "request failed");
        return (status_code, Json(ErrorBody::new("Terjadi kesalahan pada server"))).into_response();
    }
    (status_code, Json(ErrorBody::new(error.to_string()))).into_response()
}

#[derive(Error, Debug)]
pub(crate) enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Username sudah digunakan")]
    UserExists,

    #[error("Username tidak ditemukan")]
    UnknownUser,

    #[error("Password salah")]
    WrongPassword,

    #[error("Password could not be processed")]
    Password(#[from] PasswordError),

    #[error("Database Error")]
    DatabaseError(#[from] DbErr),
}

impl From<RegistrationError> for LoginError {
    fn from(error: RegistrationError) -> Self {
        match error {
            RegistrationError::UserExists => Self::UserExists,
            RegistrationError::DbErr(error) => Self::DatabaseError(error),
        }
    }
}

impl GetStatusCode for LoginError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UserExists => StatusCode::CONFLICT,
            Self::UnknownUser | Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::Password(_) | Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn test_client_error_keeps_message() {
        let response = LoginError::WrongPassword.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body(response).await, serde_json::json!({ "error": "Password salah" }));
    }

    #[test_log::test(tokio::test)]
    async fn test_server_error_is_generic() {
        let response = LoginError::DatabaseError(DbErr::Custom("disk full".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body(response).await;
        assert!(!body["error"].as_str().unwrap().contains("disk"));
    }

    #[test]
    fn test_validation_status() {
        let error: LoginError = ValidationError::PasswordMismatch.into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Password tidak cocok");
        assert_eq!(LoginError::UserExists.status_code(), StatusCode::CONFLICT);
    }
}
