mod common;

use crate::common::content::{create_material, create_video};
use crate::common::memory_db;
use dbdcare_db::{comment, material, poster, video};
use dbdcare_entity::file_type::FileType;
use dbdcare_entity::poster as poster_entity;
use sea_orm::ActiveValue::Set;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_increment_views() {
    let db = &memory_db().await;
    let created = create_material(db, "Gejala DBD", "Gejala").await;

    for _ in 0..3 {
        assert!(material::Mutation::increment_views(db, created.id).await.unwrap());
    }
    let found = material::Query::find_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(found.views, 3);

    assert!(!material::Mutation::increment_views(db, Uuid::new_v4()).await.unwrap());
}

#[test(tokio::test)]
async fn test_total_views_empty_and_filled() {
    let db = &memory_db().await;
    assert_eq!(material::Query::total_views(db).await.unwrap(), 0);
    assert_eq!(video::Query::total_views(db).await.unwrap(), 0);

    create_video(db, "Video A", 10).await;
    create_video(db, "Video B", 5).await;
    assert_eq!(video::Query::total_views(db).await.unwrap(), 15);
}

#[test(tokio::test)]
async fn test_related_excludes_self() {
    let db = &memory_db().await;
    let first = create_material(db, "3M Plus", "Pencegahan").await;
    create_material(db, "Menguras bak", "Pencegahan").await;
    create_material(db, "Demam tinggi", "Gejala").await;

    let related = material::Query::related(db, &first, 3).await.unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].title, "Menguras bak");
}

#[test(tokio::test)]
async fn test_popular_videos() {
    let db = &memory_db().await;
    create_video(db, "Sedikit", 1).await;
    create_video(db, "Banyak", 100).await;
    create_video(db, "Sedang", 50).await;

    let popular = video::Query::popular(db, 2).await.unwrap();
    let titles: Vec<_> = popular.iter().map(|video| video.title.as_str()).collect();
    assert_eq!(titles, ["Banyak", "Sedang"]);
}

#[test(tokio::test)]
async fn test_poster_downloads_and_delete() {
    let db = &memory_db().await;
    let created = poster::Mutation::create(
        db,
        poster_entity::ActiveModel {
            title: Set("Poster 3M".to_owned()),
            description: Set(String::new()),
            category: Set("Infografis".to_owned()),
            file_url: Set("https://drive.google.com/file/d/abc123/view".to_owned()),
            file_type: Set(FileType::Image),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(poster::Mutation::increment_downloads(db, created.id).await.unwrap());
    let found = poster::Query::find_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(found.downloads, 1);

    assert!(poster::Mutation::delete(db, created.id).await.unwrap());
    assert!(!poster::Mutation::delete(db, created.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_comments_survive_material_delete() {
    let db = &memory_db().await;
    let created = create_material(db, "Gejala DBD", "Gejala").await;
    comment::Mutation::create(db, created.id, "budi".to_owned(), "Bermanfaat".to_owned())
        .await
        .unwrap();

    material::Mutation::delete(db, created.id).await.unwrap();

    let comments = comment::Query::for_material(db, created.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comment::Query::count(db).await.unwrap(), 1);
}
