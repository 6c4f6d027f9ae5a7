use crate::convert::{FromDbModel, FromModel, set_if_some};
use dbdcare_entity::material::{ActiveModel, Model};
use dbdcare_model::material::{Material, NewMaterial, UpdateMaterial};
use sea_orm::ActiveValue::{NotSet, Set};

impl FromDbModel<Model> for Material {
    fn from_db_model(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            content: model.content,
            category: model.category,
            thumbnail_url: model.thumbnail_url,
            views: model.views,
            created_at: model.created_at,
        }
    }
}

impl FromModel<NewMaterial> for ActiveModel {
    fn from_model(model: NewMaterial) -> Self {
        Self {
            id: NotSet,
            title: Set(model.title),
            excerpt: Set(model.excerpt),
            content: Set(model.content),
            category: Set(model.category),
            thumbnail_url: Set(model.thumbnail_url),
            views: NotSet,
            created_at: NotSet,
        }
    }
}

impl FromModel<UpdateMaterial> for ActiveModel {
    fn from_model(model: UpdateMaterial) -> Self {
        Self {
            id: NotSet,
            title: set_if_some(model.title),
            excerpt: set_if_some(model.excerpt),
            content: set_if_some(model.content),
            category: set_if_some(model.category),
            thumbnail_url: set_if_some(model.thumbnail_url),
            views: NotSet,
            created_at: NotSet,
        }
    }
}
