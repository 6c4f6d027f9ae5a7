use dbdcare_entity::access_tokens::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).one(conn).await
    }
}
