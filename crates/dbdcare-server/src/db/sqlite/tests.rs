use super::MIGRATIONS;

use crate::db;
use crate::db::DbBackend;
use crate::db::error::DbError;
use dbdcare_test_helpers::{SqliteDb, TestDb};
use diesel::migration::MigrationVersion;
use diesel::prelude::*;
use diesel::sql_query;
use diesel_migrations::MigrationHarness;
use serial_test::serial;
use test_log::test;
use url::Url;

fn revert_all(conn: &'_ mut SqliteConnection) -> Result<Vec<MigrationVersion<'_>>, DbError> {
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|err| DbError::MigrationFailed(err.to_string()))
}

#[test]
#[serial]
fn test_migrations() {
    let db = SqliteDb::new().unwrap();
    let db_uri = db.db_uri();
    let db_uri = db_uri.as_ref();
    let mut conn = SqliteConnection::establish(db_uri).unwrap();
    // twice, so reverting leaves nothing behind
    for _ in 0..2 {
        let migrations = db::run_migrations(&mut conn, MIGRATIONS).unwrap();

        let mut conn = SqliteConnection::establish(db_uri).unwrap();
        let query = sql_query("SELECT id FROM users WHERE username = 'budi'");
        query.clone().execute(&mut conn).unwrap();
        sql_query("SELECT id FROM activity_log").execute(&mut conn).unwrap();

        let mut reverted_migrations = revert_all(&mut conn).unwrap();
        reverted_migrations.reverse();
        assert_eq!(migrations, reverted_migrations);

        query.execute(&mut conn).unwrap_err();
    }
}

#[test(tokio::test)]
#[serial]
async fn test_migration_is_idempotent() {
    let db = SqliteDb::new().unwrap();
    let url = Url::parse(&db.db_uri()).unwrap();

    let first = db::migration(&url).await.unwrap();
    assert!(!first.is_empty());
    let second = db::migration(&url).await.unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_backend_from_scheme() {
    assert_eq!(DbBackend::parse("sqlite").unwrap(), DbBackend::Sqlite);
    assert!(matches!(DbBackend::parse(""), Err(DbError::UnknownDbType(name)) if name == "NO_TYPE"));
    assert!(matches!(DbBackend::parse("mysql+tcp"), Err(DbError::UnknownDbType(name)) if name == "mysql"));
}

#[test(tokio::test)]
async fn test_unknown_scheme() {
    let url = Url::parse("mysql://localhost/dbdcare").unwrap();
    let res = db::migration(&url).await;
    assert!(matches!(res, Err(DbError::UnknownDbType(db_type)) if db_type == "mysql"));
}
