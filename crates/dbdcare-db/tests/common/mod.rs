pub mod content;
pub mod user;

use sea_orm::{ConnectionTrait, Database, DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let migration = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => include_str!("postgres.sql"),
        sea_orm::DatabaseBackend::Sqlite => include_str!("sqlite.sql"),
        #[allow(clippy::unimplemented)]
        sea_orm::DatabaseBackend::MySql => unimplemented!(),
    };

    db.execute_unprepared(migration).await?;
    Ok(())
}

#[allow(dead_code)]
pub async fn memory_db() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}
