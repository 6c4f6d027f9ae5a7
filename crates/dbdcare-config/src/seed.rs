//! Demo content inserted by the seed maintenance action.
//!
//! Seed files are versioned YAML documents:
//!
//! ```yaml
//! version: "0.1"
//! materials:
//!   - title: Mengenal DBD
//!     category: Edukasi
//!     content: ...
//! ```

use crate::error::LoadingError;
use dbdcare_model::document::{FileType, NewDocument};
use dbdcare_model::material::NewMaterial;
use dbdcare_model::video::NewVideo;
use schemars::JsonSchema;
use serde_derive::Deserialize;
use std::path::Path;

const DEFAULT_SEED: &str = include_str!("../content/seed.yaml");

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01(SeedBundle),
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SeedBundle {
    #[serde(default)]
    pub materials: Vec<SeedMaterial>,
    #[serde(default)]
    pub posters: Vec<SeedDocument>,
    #[serde(default)]
    pub leaflets: Vec<SeedDocument>,
    #[serde(default)]
    pub videos: Vec<SeedVideo>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SeedMaterial {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeedFileType {
    #[default]
    Image,
    Pdf,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SeedDocument {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub file_url: String,
    #[serde(default)]
    pub file_type: SeedFileType,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SeedVideo {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub youtube_url: String,
    #[serde(default)]
    pub duration: String,
}

impl From<SeedMaterial> for NewMaterial {
    fn from(value: SeedMaterial) -> Self {
        Self {
            title: value.title,
            excerpt: value.excerpt,
            content: value.content,
            category: value.category,
            thumbnail_url: value.thumbnail_url,
        }
    }
}

impl From<SeedDocument> for NewDocument {
    fn from(value: SeedDocument) -> Self {
        Self {
            title: value.title,
            description: value.description,
            category: value.category,
            file_url: value.file_url,
            file_type: match value.file_type {
                SeedFileType::Image => FileType::Image,
                SeedFileType::Pdf => FileType::Pdf,
            },
        }
    }
}

impl From<SeedVideo> for NewVideo {
    fn from(value: SeedVideo) -> Self {
        Self {
            title: value.title,
            description: value.description,
            youtube_url: value.youtube_url,
            category: value.category,
            duration: value.duration,
        }
    }
}

pub fn parse(content: &str) -> Result<SeedBundle, LoadingError> {
    let VersionConfig::V01(seed) = serde_yml::from_str::<VersionConfig>(content)?;
    Ok(seed)
}

/// The bundle shipped with the binary.
pub fn embedded() -> Result<SeedBundle, LoadingError> {
    parse(DEFAULT_SEED)
}

/// Reads `path` when given, the embedded bundle otherwise.
pub async fn load(path: Option<&Path>) -> Result<SeedBundle, LoadingError> {
    let Some(path) = path else {
        tracing::debug!("using embedded seed bundle");
        return embedded();
    };
    tracing::debug!(?path, "loading seed bundle");
    let content = tokio::fs::read_to_string(path).await.map_err(|source| LoadingError::IO {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use test_log::test;

    #[test]
    fn test_embedded_bundle() {
        let seed = embedded().unwrap();
        assert_eq!(seed.materials.len(), 5);
        assert_eq!(seed.posters.len(), 6);
        assert!(seed.leaflets.is_empty());
        assert_eq!(seed.videos.len(), 6);
        assert!(seed.videos.iter().all(|video| video.youtube_url.contains("youtube.com")));
    }

    #[test]
    fn test_seed_loading() {
        let seed_file = read_to_string("test_configs/test.seed.yaml").unwrap();
        let seed = parse(&seed_file).unwrap();
        assert_eq!(seed.materials.len(), 1);
        assert_eq!(seed.leaflets.len(), 1);
        assert!(matches!(seed.leaflets[0].file_type, SeedFileType::Pdf));
        assert!(seed.videos.is_empty());

        let document: NewDocument = seed.leaflets[0].clone().into();
        assert_eq!(document.file_type, FileType::Pdf);
    }

    #[test]
    fn test_unknown_version() {
        assert!(parse("version: \"9.9\"\nmaterials: []\n").is_err());
    }

    #[test]
    fn test_unknown_field() {
        assert!(parse("version: \"0.1\"\nmaterial: []\n").is_err());
    }

    #[test(tokio::test)]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(&path, "version: \"0.1\"\nposters: []\n").unwrap();
        let seed = load(Some(&path)).await.unwrap();
        assert!(seed.posters.is_empty());
        assert!(matches!(
            load(Some(&dir.path().join("missing.yaml"))).await,
            Err(LoadingError::IO { .. })
        ));
        assert_eq!(load(None).await.unwrap().materials.len(), 5);
    }
}
