use crate::routes::error::{GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use dbdcare_core::quiz::QuizError;
use dbdcare_model_tools::error::Error as ConversionError;
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum QuizRouteError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("Stored quiz data is invalid")]
    Conversion(#[from] ConversionError),

    #[error("Jawaban untuk pertanyaan {question} tidak valid")]
    InvalidAnswer { question: usize },

    #[error("Pertanyaan {0} belum diisi")]
    EmptyQuestion(usize),

    #[error("Hasil kuis tidak ditemukan")]
    ResponseNotFound,

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl GetStatusCode for QuizRouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidAnswer { .. } | Self::EmptyQuestion(_) | Self::Quiz(_) => StatusCode::BAD_REQUEST,
            Self::ResponseNotFound => StatusCode::NOT_FOUND,
            Self::SeaOrmError(_) | Self::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QuizRouteError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
