use thiserror::Error;

/// A stored JSON column does not match its API model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("stored value has an unexpected shape: {0}")]
    MalformedColumn(#[from] serde_json::Error),
}
