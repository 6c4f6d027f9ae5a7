use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const VIDEO_CATEGORIES: &[&str] = &["Pengenalan", "Pencegahan", "Gejala", "Edukasi", "Penanganan", "Lainnya"];

/// Category used for stored values outside [`VIDEO_CATEGORIES`].
pub const FALLBACK_VIDEO_CATEGORY: &str = "Lainnya";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub youtube_id: String,
    pub youtube_url: String,
    pub category: String,
    #[schema(example = "3:45")]
    pub duration: String,
    pub views: i64,
    pub created_at: NaiveDateTime,
    pub thumbnail_url: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewVideo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub youtube_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub youtube_url: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
}
