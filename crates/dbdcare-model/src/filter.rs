use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Pseudo category that disables category filtering.
pub const ALL_CATEGORIES: &str = "Semua";

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Exact category, `Semua` or absent for every category.
    pub category: Option<String>,
    /// Case-insensitive substring of the title or description.
    pub search: Option<String>,
}
