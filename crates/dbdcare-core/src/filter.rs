use dbdcare_model::document::Document;
use dbdcare_model::filter::{ALL_CATEGORIES, ListQuery};
use dbdcare_model::material::Material;
use dbdcare_model::video::{FALLBACK_VIDEO_CATEGORY, VIDEO_CATEGORIES, Video};

/// Something listed on a public page with a category filter and a search box.
pub trait Filterable {
    fn category(&self) -> &str;

    /// Fields matched by the search box.
    fn searchable(&self) -> Vec<&str>;
}

impl Filterable for Material {
    fn category(&self) -> &str {
        &self.category
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt, &self.content]
    }
}

impl Filterable for Document {
    fn category(&self) -> &str {
        &self.category
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

impl Filterable for Video {
    fn category(&self) -> &str {
        &self.category
    }

    fn searchable(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[must_use]
pub fn matches<T: Filterable>(item: &T, query: &ListQuery) -> bool {
    let category_matches = match query.category.as_deref().map(str::trim) {
        None | Some("") | Some(ALL_CATEGORIES) => true,
        Some(category) => item.category() == category,
    };
    let search_matches = match query.search.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(search) => {
            let needle = search.to_lowercase();
            item.searchable()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }
    };
    category_matches && search_matches
}

#[must_use]
pub fn filter<T: Filterable>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    items.into_iter().filter(|item| matches(item, query)).collect()
}

/// Maps stored video categories outside the known list to the fallback.
#[must_use]
pub fn coerce_video_category(category: &str) -> String {
    if VIDEO_CATEGORIES.contains(&category) {
        category.to_owned()
    } else {
        FALLBACK_VIDEO_CATEGORY.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn material(title: &str, category: &str, content: &str) -> Material {
        Material {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            excerpt: String::new(),
            content: content.to_owned(),
            category: category.to_owned(),
            thumbnail_url: String::new(),
            views: 0,
            created_at: NaiveDateTime::default(),
        }
    }

    fn query(category: Option<&str>, search: Option<&str>) -> ListQuery {
        ListQuery {
            category: category.map(str::to_owned),
            search: search.map(str::to_owned),
        }
    }

    fn titles(items: &[Material]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_category_filter() {
        let items = vec![
            material("Gejala DBD", "Gejala", ""),
            material("3M Plus", "Pencegahan", ""),
        ];
        assert_eq!(titles(&filter(items.clone(), &query(Some("Gejala"), None))), vec!["Gejala DBD"]);
        assert_eq!(filter(items.clone(), &query(Some("Semua"), None)).len(), 2);
        assert_eq!(filter(items.clone(), &query(None, None)).len(), 2);
        assert!(filter(items, &query(Some("Bahaya"), None)).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            material("Gejala DBD", "Gejala", ""),
            material("Nyamuk", "Edukasi", "Aedes aegypti bertelur di air BERSIH"),
        ];
        assert_eq!(titles(&filter(items.clone(), &query(None, Some("gejala")))), vec!["Gejala DBD"]);
        assert_eq!(titles(&filter(items.clone(), &query(None, Some("bersih")))), vec!["Nyamuk"]);
        assert_eq!(
            titles(&filter(items, &query(Some("Gejala"), Some("nyamuk")))),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn test_video_category_coercion() {
        assert_eq!(coerce_video_category("Gejala"), "Gejala");
        assert_eq!(coerce_video_category("Tutorial"), "Lainnya");
        assert_eq!(coerce_video_category(""), "Lainnya");
    }
}
