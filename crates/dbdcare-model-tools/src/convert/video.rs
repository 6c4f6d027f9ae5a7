use crate::convert::{FromDbModel, FromModel, set_if_some};
use dbdcare_core::filter::coerce_video_category;
use dbdcare_core::media::{youtube_embed_url, youtube_thumbnail_url};
use dbdcare_entity::video::{ActiveModel, Model};
use dbdcare_model::video::{NewVideo, UpdateVideo, Video};
use sea_orm::ActiveValue::{NotSet, Set};

impl FromDbModel<Model> for Video {
    fn from_db_model(model: Model) -> Self {
        Self {
            thumbnail_url: youtube_thumbnail_url(&model.youtube_id),
            embed_url: youtube_embed_url(&model.youtube_id),
            category: coerce_video_category(&model.category),
            id: model.id,
            title: model.title,
            description: model.description,
            youtube_id: model.youtube_id,
            youtube_url: model.youtube_url,
            duration: model.duration,
            views: model.views,
            created_at: model.created_at,
        }
    }
}

/// The video together with the id extracted from its url.
impl FromModel<(NewVideo, String)> for ActiveModel {
    fn from_model((model, youtube_id): (NewVideo, String)) -> Self {
        Self {
            id: NotSet,
            title: Set(model.title),
            description: Set(model.description),
            youtube_id: Set(youtube_id),
            youtube_url: Set(model.youtube_url),
            category: Set(model.category),
            duration: Set(model.duration),
            views: NotSet,
            created_at: NotSet,
        }
    }
}

impl FromModel<(UpdateVideo, Option<String>)> for ActiveModel {
    fn from_model((model, youtube_id): (UpdateVideo, Option<String>)) -> Self {
        Self {
            id: NotSet,
            title: set_if_some(model.title),
            description: set_if_some(model.description),
            youtube_id: set_if_some(youtube_id),
            youtube_url: set_if_some(model.youtube_url),
            category: set_if_some(model.category),
            duration: set_if_some(model.duration),
            views: NotSet,
            created_at: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;

    #[test]
    fn test_unknown_category_is_coerced() {
        let model = Model {
            id: uuid::Uuid::new_v4(),
            title: "Video".to_owned(),
            description: String::new(),
            youtube_id: "4tpY7eGSF4s".to_owned(),
            youtube_url: "https://youtu.be/4tpY7eGSF4s".to_owned(),
            category: "Tutorial".to_owned(),
            duration: "3:45".to_owned(),
            views: 0,
            created_at: chrono::NaiveDateTime::default(),
        };
        let video: Video = model.into_model();
        assert_eq!(video.category, "Lainnya");
        assert_eq!(video.embed_url, "https://www.youtube.com/embed/4tpY7eGSF4s");
        assert_eq!(video.thumbnail_url, "https://img.youtube.com/vi/4tpY7eGSF4s/maxresdefault.jpg");
    }
}
