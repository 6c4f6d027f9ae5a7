use dbdcare_entity::comment::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Comments of one material, newest first.
    pub async fn for_material<C: ConnectionTrait>(conn: &C, material_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::MaterialId.eq(material_id))
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
    }

    pub async fn recent<C: ConnectionTrait>(conn: &C, limit: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(conn)
            .await
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Entity::find().count(conn).await
    }
}
