use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use utoipa::ToSchema;

pub const FALLBACK_CHECKLIST_CATEGORY: &str = "Lainnya";
pub const FALLBACK_CHECKLIST_FREQUENCY: &str = "Tidak ditentukan";

/// A checklist entry after defaults were applied. `id` is a uuid for stored items and a slug
/// for the built-in list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub frequency: String,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewChecklistItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub frequency: String,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateChecklistItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<String>,
    /// `null` clears the order, a missing field keeps it.
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub order: Option<Option<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_tristate() {
        let keep: UpdateChecklistItem = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(keep.order, None);
        let clear: UpdateChecklistItem = serde_json::from_str(r#"{"order":null}"#).unwrap();
        assert_eq!(clear.order, Some(None));
        let set: UpdateChecklistItem = serde_json::from_str(r#"{"order":3}"#).unwrap();
        assert_eq!(set.order, Some(Some(3)));
    }
}
