use dbdcare_db::{material, video};
use dbdcare_entity::{material as material_entity, video as video_entity};
use sea_orm::ActiveValue::Set;
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_material(db: &DatabaseConnection, title: &str, category: &str) -> material_entity::Model {
    material::Mutation::create(
        db,
        material_entity::ActiveModel {
            title: Set(title.to_owned()),
            excerpt: Set(format!("{title} excerpt")),
            content: Set("# Konten".to_owned()),
            category: Set(category.to_owned()),
            thumbnail_url: Set(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_video(db: &DatabaseConnection, title: &str, views: i64) -> video_entity::Model {
    video::Mutation::create(
        db,
        video_entity::ActiveModel {
            title: Set(title.to_owned()),
            description: Set(String::new()),
            youtube_id: Set("4tpY7eGSF4s".to_owned()),
            youtube_url: Set("https://www.youtube.com/watch?v=4tpY7eGSF4s".to_owned()),
            category: Set("Pencegahan".to_owned()),
            duration: Set("3:45".to_owned()),
            views: Set(views),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}
