use dbdcare_entity::activity_log::{Action, ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::Json;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        username: String,
        action: Action,
        target: String,
        target_id: Option<String>,
        metadata: Option<Json>,
    ) -> Result<Model, DbErr> {
        let log = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            action: Set(action),
            target: Set(target),
            target_id: Set(target_id),
            metadata: Set(metadata),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        Entity::insert(log).exec_with_returning(conn).await
    }
}
