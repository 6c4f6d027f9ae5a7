use dbdcare_entity::quiz_question::{Column, Entity, Model};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    /// Questions of the quiz in display order.
    pub async fn questions<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load quiz questions"))
    }
}
