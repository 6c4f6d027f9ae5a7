//! Checklist items and the per-client completion state.

use dbdcare_model::checklist::{ChecklistItem, FALLBACK_CHECKLIST_CATEGORY, FALLBACK_CHECKLIST_FREQUENCY};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// How long the completion celebration stays visible.
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("unknown checklist item {0}")]
    UnknownItem(String),
}

/// Raw item as stored, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct RawChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub frequency: String,
    pub order: Option<i32>,
}

/// Fills empty fields and sorts by `order`. Items without an order take their 1-based position.
#[must_use]
pub fn normalize_items(items: Vec<RawChecklistItem>) -> Vec<ChecklistItem> {
    let mut items: Vec<ChecklistItem> = items
        .into_iter()
        .zip(1..)
        .map(|(item, position)| ChecklistItem {
            id: item.id,
            title: non_empty_or(item.title, || format!("Checklist {position}")),
            description: item.description,
            category: non_empty_or(item.category, || FALLBACK_CHECKLIST_CATEGORY.to_owned()),
            frequency: non_empty_or(item.frequency, || FALLBACK_CHECKLIST_FREQUENCY.to_owned()),
            order: item.order.unwrap_or(position),
        })
        .collect();
    items.sort_by_key(|item| item.order);
    items
}

/// Items to show when nothing is stored or the store is unreachable.
#[must_use]
pub fn resolve_items(stored: Option<Vec<RawChecklistItem>>) -> Vec<ChecklistItem> {
    match stored {
        Some(items) if !items.is_empty() => normalize_items(items),
        _ => default_items(),
    }
}

fn non_empty_or(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.trim().is_empty() { fallback() } else { value }
}

#[must_use]
pub fn default_items() -> Vec<ChecklistItem> {
    let item = |id: &str, title: &str, description: &str, category: &str, frequency: &str, order: i32| ChecklistItem {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        frequency: frequency.to_owned(),
        order,
    };
    vec![
        item(
            "menguras",
            "Menguras bak mandi",
            "Kuras dan sikat dinding bak mandi serta tempat penampungan air.",
            "3M Plus",
            "Seminggu sekali",
            1,
        ),
        item(
            "menutup",
            "Menutup tempat penampungan air",
            "Tutup rapat ember, drum, dan tandon air.",
            "3M Plus",
            "Setiap hari",
            2,
        ),
        item(
            "mendaur-ulang",
            "Mendaur ulang barang bekas",
            "Kubur atau daur ulang kaleng, ban, dan botol yang bisa menampung air.",
            "3M Plus",
            "Seminggu sekali",
            3,
        ),
        item(
            "abate",
            "Menaburkan bubuk abate",
            "Taburkan abate di tempat air yang sulit dikuras.",
            "Plus",
            "Dua bulan sekali",
            4,
        ),
        item(
            "lotion",
            "Memakai lotion anti nyamuk",
            "Gunakan lotion anti nyamuk saat pagi dan sore hari.",
            "Plus",
            "Setiap hari",
            5,
        ),
        item(
            "kasa",
            "Memasang kawat kasa",
            "Pasang kawat kasa di ventilasi dan jendela rumah.",
            "Plus",
            "Sekali pasang",
            6,
        ),
        item(
            "pakaian",
            "Tidak menggantung pakaian",
            "Simpan pakaian kotor di tempat tertutup.",
            "Plus",
            "Setiap hari",
            7,
        ),
        item(
            "jentik",
            "Memeriksa jentik nyamuk",
            "Periksa tempat penampungan air dari jentik nyamuk.",
            "Pemantauan",
            "Seminggu sekali",
            8,
        ),
    ]
}

/// Completion state of one client, keyed by item id in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistProgress {
    checked: IndexMap<String, bool>,
}

impl ChecklistProgress {
    /// Every item unchecked.
    #[must_use]
    pub fn new(items: &[ChecklistItem]) -> Self {
        Self::merge(items, &HashMap::new())
    }

    /// Restores `saved` onto `items`. Entries for unknown ids are dropped, missing ones start unchecked.
    #[must_use]
    pub fn merge(items: &[ChecklistItem], saved: &HashMap<String, bool>) -> Self {
        let checked = items
            .iter()
            .map(|item| (item.id.clone(), saved.get(&item.id).copied().unwrap_or(false)))
            .collect();
        Self { checked }
    }

    /// Flips one item and reports whether the list became complete with this toggle.
    pub fn toggle(&mut self, item_id: &str) -> Result<Option<Celebration>, ChecklistError> {
        let was_complete = self.is_complete();
        let checked = self
            .checked
            .get_mut(item_id)
            .ok_or_else(|| ChecklistError::UnknownItem(item_id.to_owned()))?;
        *checked = !*checked;
        Ok((!was_complete && self.is_complete()).then(Celebration::new))
    }

    pub fn reset(&mut self) {
        self.checked.values_mut().for_each(|checked| *checked = false);
    }

    #[must_use]
    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.get(item_id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.checked.values().filter(|checked| **checked).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.checked.len()
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let percentage = self.completed_count() as f64 / self.total() as f64 * 100.0;
        percentage
    }

    #[must_use]
    pub fn rounded_percentage(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.percentage().round() as u32;
        rounded
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total() > 0 && self.checked.values().all(|checked| *checked)
    }

    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, bool> {
        &self.checked
    }
}

/// One-shot completion celebration, dismissed after [`CELEBRATION_DURATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    pub duration: Duration,
}

impl Celebration {
    fn new() -> Self {
        Self {
            duration: CELEBRATION_DURATION,
        }
    }
}
