use dbdcare_entity::quiz_response::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        username: String,
        score: i32,
        answers: &[i32],
    ) -> Result<Model, DbErr> {
        let response = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            score: Set(score),
            answers: Set(serde_json::json!(answers)),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        Entity::insert(response)
            .exec_with_returning(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to save quiz response"))
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(conn).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(conn).await?.rows_affected)
    }
}
