use dbdcare_entity::user::{ActiveModel, Entity, Model, Role};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts an account. `username` must already be normalized and `password_hash` hashed.
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        username: String,
        password_hash: String,
        role: Role,
    ) -> Result<Model, DbErr> {
        let new_user = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            password: Set(password_hash),
            role: Set(role),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        Entity::insert(new_user).exec_with_returning(conn).await
    }

    pub async fn update_role<C: ConnectionTrait>(conn: &C, user_id: Uuid, role: Role) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            role: Set(role),
            ..Default::default()
        };
        user.update(conn).await
    }
}
