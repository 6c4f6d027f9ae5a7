mod common;

use crate::common::memory_db;
use crate::common::user::create_test_user;
use dbdcare_db::{access_tokens, user};
use dbdcare_entity::user::Role;
use test_log::test;

#[test(tokio::test)]
async fn test_find_by_username() {
    let db = &memory_db().await;
    let created = create_test_user(db, "budi").await;

    let found = user::Query::find_by_username(db, "budi").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, Role::User);
    assert!(user::Query::find_by_username(db, "sari").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_username_is_unique() {
    let db = &memory_db().await;
    create_test_user(db, "budi").await;

    let res = user::Mutation::create_user(db, "budi".to_owned(), "x$y".to_owned(), Role::User).await;
    assert!(res.is_err());
    assert_eq!(user::Query::count(db).await.unwrap(), 1);
}

#[test(tokio::test)]
async fn test_token_roundtrip() {
    let db = &memory_db().await;
    let created = create_test_user(db, "budi").await;

    let token = access_tokens::Mutation::issue(db, created.id).await.unwrap();
    let again = access_tokens::Mutation::issue(db, created.id).await.unwrap();
    assert_eq!(token.access_token, again.access_token);

    let found = user::Query::find_by_token(db, &token.access_token).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    let deleted = access_tokens::Mutation::revoke(db, created.id).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(user::Query::find_by_token(db, &token.access_token).await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_update_role() {
    let db = &memory_db().await;
    let created = create_test_user(db, "budi").await;

    user::Mutation::update_role(db, created.id, Role::Admin).await.unwrap();
    let found = user::Query::find_user_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(found.role, Role::Admin);
}
