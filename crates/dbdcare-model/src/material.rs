use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Categories offered by the admin form. Stored values outside this list are kept as they are.
pub const MATERIAL_CATEGORIES: &[&str] = &["Pencegahan", "Gejala", "Pengobatan", "3M Plus", "Edukasi", "Penanganan"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Material {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub thumbnail_url: String,
    pub views: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaterialDetail {
    pub material: Material,
    pub related: Vec<Material>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewMaterial {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMaterial {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
}
