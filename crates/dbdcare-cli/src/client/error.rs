use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Status { status: StatusCode, message: String },

    #[error("Not logged in")]
    NotLoggedIn,
}

impl Error {
    pub(crate) fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == StatusCode::UNAUTHORIZED,
            Self::NotLoggedIn => true,
            Self::InvalidUrl(_) | Self::Request(_) => false,
        }
    }
}
