use crate::TestDb;
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A sqlite file in a temporary directory, removed on drop.
pub struct SqliteDb {
    _temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("dbdcare-sqlite")?;
        let path = temp_dir.path().join("db.sqlite");
        let path = path
            .to_str()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::debug!(%uri, "created temporary sqlite db");
        Ok(Self {
            _temp_dir: temp_dir,
            uri,
        })
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_uri_points_into_temp_dir() {
        let db = SqliteDb::new().unwrap();
        let uri = db.db_uri().into_owned();
        assert!(uri.starts_with("sqlite://"));
        assert!(uri.ends_with("db.sqlite?mode=rwc"));
        let path = db._temp_dir.path().to_path_buf();
        drop(db);
        assert!(!path.exists());
    }
}
