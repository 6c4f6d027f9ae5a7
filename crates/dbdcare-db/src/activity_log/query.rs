use chrono::NaiveDateTime;
use dbdcare_entity::activity_log::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    /// Activity newest first, optionally restricted to entries at or after `since`.
    pub async fn since<C: ConnectionTrait>(conn: &C, since: Option<NaiveDateTime>) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find();
        if let Some(since) = since {
            query = query.filter(Column::CreatedAt.gte(since));
        }
        query
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load activity logs"))
    }
}
