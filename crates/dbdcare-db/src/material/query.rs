use crate::util::sum_as_bigint;
use dbdcare_entity::material::{Column, Entity, Model};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// All materials, newest first.
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load materials"))
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(conn).await
    }

    pub async fn find_by_title<C: ConnectionTrait>(conn: &C, title: &str) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::Title.eq(title)).one(conn).await
    }

    pub async fn latest<C: ConnectionTrait>(conn: &C, limit: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(conn)
            .await
    }

    /// Materials sharing a category with `material`, the material itself excluded.
    pub async fn related<C: ConnectionTrait>(conn: &C, material: &Model, limit: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Category.eq(material.category.as_str()))
            .filter(Column::Id.ne(material.id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(conn)
            .await
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Entity::find().count(conn).await
    }

    pub async fn total_views<C: ConnectionTrait>(conn: &C) -> Result<i64, DbErr> {
        let total = Entity::find()
            .select_only()
            .column_as(sum_as_bigint("views"), "total")
            .into_tuple::<i64>()
            .one(conn)
            .await?;
        Ok(total.unwrap_or_default())
    }
}
