//! Posters and leaflets: downloadable files hosted elsewhere.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;
use uuid::Uuid;

pub const POSTER_CATEGORIES: &[&str] = &[
    "Poster Anak",
    "Poster Keluarga",
    "Infografis",
    "Gejala",
    "Pencegahan",
    "Edukasi",
    "Bahaya",
    "Penanganan",
];

pub const LEAFLET_CATEGORIES: &[&str] = &["Pencegahan", "3M Plus"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileType {
    #[default]
    Image,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    pub file_type: FileType,
    pub downloads: i64,
    pub created_at: NaiveDateTime,
    /// Embeddable preview of the file, the file url itself when no preview can be derived.
    pub preview_url: String,
    pub thumbnail_url: String,
    pub download_url: String,
}

pub type Poster = Document;
pub type Leaflet = Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub file_url: String,
    #[serde(default)]
    pub file_type: FileType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_url: Option<String>,
    pub file_type: Option<FileType>,
}
