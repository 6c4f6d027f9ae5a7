//! The local state file: one JSON object, read and written whole.

use dbdcare_core::checklist::ChecklistProgress;
use dbdcare_model::user::Role;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const AUTH_KEY: &str = "auth";
const CHECKLIST_KEY: &str = "dbd-checklist";

#[derive(Debug, Error)]
pub(crate) enum StateError {
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The logged in account, as kept between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Session {
    pub(crate) username: String,
    pub(crate) role: Role,
    pub(crate) token: String,
}

pub(crate) struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// The whole object. A missing file is empty, an unreadable one is logged and treated as empty.
    async fn load(&self) -> Map<String, Value> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Map::new(),
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, path = %self.path.display(), "failed to read state file");
                return Map::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, path = %self.path.display(), "state file is corrupt");
                Map::new()
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.load().await.remove(key)?;
        serde_json::from_value(value)
            .inspect_err(|error| tracing::warn!(error = error as &dyn Error, key, "ignoring unreadable state entry"))
            .ok()
    }

    async fn set(&self, key: &str, value: Option<Value>) -> Result<(), StateError> {
        let mut map = self.load().await;
        match value {
            Some(value) => map.insert(key.to_owned(), value),
            None => map.remove(key),
        };
        let content = serde_json::to_string_pretty(&map)?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| StateError::Write {
                path: self.path.clone(),
                source,
            })
    }

    pub(crate) async fn session(&self) -> Option<Session> {
        self.get(AUTH_KEY).await
    }

    pub(crate) async fn set_session(&self, session: Option<&Session>) -> Result<(), StateError> {
        let value = session.map(serde_json::to_value).transpose()?;
        self.set(AUTH_KEY, value).await
    }

    pub(crate) async fn checklist(&self) -> HashMap<String, bool> {
        self.get(CHECKLIST_KEY).await.unwrap_or_default()
    }

    pub(crate) async fn set_checklist(&self, progress: &ChecklistProgress) -> Result<(), StateError> {
        self.set(CHECKLIST_KEY, Some(serde_json::to_value(progress)?)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdcare_core::checklist::default_items;
    use tempfile::TempDir;
    use test_log::test;

    fn state_file(dir: &TempDir) -> StateFile {
        StateFile::new(dir.path().join("state.json"))
    }

    #[test(tokio::test)]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let state = state_file(&dir);
        assert_eq!(state.session().await, None);
        assert!(state.checklist().await.is_empty());
    }

    #[test(tokio::test)]
    async fn test_session_and_checklist_share_the_file() {
        let dir = TempDir::new().unwrap();
        let state = state_file(&dir);
        let session = Session {
            username: "budi".to_owned(),
            role: Role::User,
            token: "abc".to_owned(),
        };
        state.set_session(Some(&session)).await.unwrap();

        let items = default_items();
        let mut progress = ChecklistProgress::new(&items);
        progress.toggle(&items[0].id).unwrap();
        state.set_checklist(&progress).await.unwrap();

        assert_eq!(state.session().await, Some(session));
        let saved = state.checklist().await;
        assert_eq!(saved.len(), items.len());
        assert_eq!(saved.get(&items[0].id), Some(&true));

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(state.path()).unwrap()).unwrap();
        assert_eq!(raw["auth"]["role"], "user");
        assert_eq!(raw["dbd-checklist"][&items[0].id], true);

        state.set_session(None).await.unwrap();
        assert_eq!(state.session().await, None);
        assert_eq!(state.checklist().await.len(), items.len());
    }

    #[test(tokio::test)]
    async fn test_corrupt_entries_are_ignored() {
        let dir = TempDir::new().unwrap();
        let state = state_file(&dir);

        std::fs::write(state.path(), "{ not json").unwrap();
        assert!(state.checklist().await.is_empty());

        std::fs::write(state.path(), r#"{"dbd-checklist": [1, 2], "auth": {"username": "budi"}}"#).unwrap();
        assert!(state.checklist().await.is_empty());
        assert_eq!(state.session().await, None);
    }
}
