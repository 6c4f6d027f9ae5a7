use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use utoipa::ToSchema;

/// Health of the server as reported by `GET /api/v0/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Status {
    /// `ok`, or the reason the database check failed
    #[schema(example = "ok")]
    pub database: String,
    #[schema(example = "0.3.1")]
    pub version: String,
}

impl Status {
    #[must_use]
    pub fn new(database: &ComponentStatus, version: impl Into<String>) -> Self {
        Self {
            database: database.to_string(),
            version: version.into(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.database == ComponentStatus::OK
    }
}

/// Result of probing one backing component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentStatus {
    Ok,
    Failed(String),
}

impl ComponentStatus {
    pub const OK: &'static str = "ok";

    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl Display for ComponentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str(Self::OK),
            Self::Failed(reason) => f.write_str(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_component() {
        let status = Status::new(&ComponentStatus::Ok, "1.0.0");
        assert!(status.is_ok());
        assert_eq!(serde_json::to_value(&status).unwrap()["database"], "ok");

        let status = Status::new(&ComponentStatus::failed("timeout"), "1.0.0");
        assert!(!status.is_ok());
        assert_eq!(status.database, "timeout");
    }
}
