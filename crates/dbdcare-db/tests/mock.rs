use dbdcare_db::{checklist, material};
use dbdcare_entity::checklist_item;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
use std::collections::BTreeMap;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_total_views_decodes_sum() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("total", Value::BigInt(Some(42)))])]])
        .into_connection();

    assert_eq!(material::Query::total_views(&db).await?, 42);

    Ok(())
}

#[test(tokio::test)]
async fn test_checklist_all() -> Result<(), DbErr> {
    let now = chrono::Utc::now().naive_utc();
    let models = [
        checklist_item::Model {
            id: Uuid::new_v4(),
            title: "Kuras bak mandi".to_owned(),
            description: String::new(),
            category: "3M".to_owned(),
            frequency: "Mingguan".to_owned(),
            order: Some(1),
            created_at: now,
        },
        checklist_item::Model {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            category: String::new(),
            frequency: String::new(),
            order: None,
            created_at: now,
        },
    ];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([models.clone()])
        .into_connection();

    assert_eq!(checklist::Query::all(&db).await?, Vec::from(models));

    Ok(())
}
