use chrono::NaiveDateTime;
use dbdcare_entity::quiz_response::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    /// All responses, newest first.
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_desc(Column::CreatedAt).all(conn).await
    }

    pub async fn since<C: ConnectionTrait>(conn: &C, since: NaiveDateTime) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CreatedAt.gte(since))
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Entity::find().count(conn).await
    }
}
