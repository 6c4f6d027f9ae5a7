use crate::material::Material;
use crate::video::Video;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Home {
    pub latest_materials: Vec<Material>,
    pub popular_videos: Vec<Video>,
}
