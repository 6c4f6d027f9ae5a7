use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    #[error("could not connect for migrations")]
    Connection(#[from] diesel::result::ConnectionError),

    #[error("unsupported database type {0}")]
    UnknownDbType(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid database url")]
    InvalidUrl(#[from] url::ParseError),
}
