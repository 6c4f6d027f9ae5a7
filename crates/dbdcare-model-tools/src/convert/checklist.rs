use crate::convert::{FromDbModel, FromModel, set_if_some};
use dbdcare_core::checklist::RawChecklistItem;
use dbdcare_entity::checklist_item::{ActiveModel, Model};
use dbdcare_model::checklist::{NewChecklistItem, UpdateChecklistItem};
use sea_orm::ActiveValue::{NotSet, Set};

impl FromDbModel<Model> for RawChecklistItem {
    fn from_db_model(model: Model) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
            description: model.description,
            category: model.category,
            frequency: model.frequency,
            order: model.order,
        }
    }
}

impl FromModel<NewChecklistItem> for ActiveModel {
    fn from_model(model: NewChecklistItem) -> Self {
        Self {
            id: NotSet,
            title: Set(model.title),
            description: Set(model.description),
            category: Set(model.category),
            frequency: Set(model.frequency),
            order: Set(model.order),
            created_at: NotSet,
        }
    }
}

impl FromModel<UpdateChecklistItem> for ActiveModel {
    fn from_model(model: UpdateChecklistItem) -> Self {
        Self {
            id: NotSet,
            title: set_if_some(model.title),
            description: set_if_some(model.description),
            category: set_if_some(model.category),
            frequency: set_if_some(model.frequency),
            order: set_if_some(model.order),
            created_at: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearing_order() {
        let active = ActiveModel::from_model(UpdateChecklistItem {
            order: Some(None),
            ..Default::default()
        });
        assert_eq!(active.order, Set(None));
        assert!(active.title.is_not_set());
    }
}
