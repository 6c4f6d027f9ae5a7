use dbdcare_db::user;
use dbdcare_entity::user::{Model as UserModel, Role};
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> UserModel {
    user::Mutation::create_user(db, username.to_owned(), "c2FsdA==$aGFzaA==".to_owned(), Role::User)
        .await
        .unwrap()
}
