use dbdcare_entity::comment::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        material_id: Uuid,
        username: String,
        content: String,
    ) -> Result<Model, DbErr> {
        let comment = ActiveModel {
            id: Set(Uuid::new_v4()),
            material_id: Set(material_id),
            username: Set(username),
            content: Set(content),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        Entity::insert(comment).exec_with_returning(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(conn).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(conn).await?.rows_affected)
    }
}
