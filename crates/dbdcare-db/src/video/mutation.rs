use crate::util::increment;
use dbdcare_entity::video::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts a new video. `id`, `views` and `created_at` are filled in when not set.
    pub async fn create<C: ConnectionTrait>(conn: &C, mut video: ActiveModel) -> Result<Model, DbErr> {
        if video.id.is_not_set() {
            video.id = Set(Uuid::new_v4());
        }
        if video.views.is_not_set() {
            video.views = Set(0);
        }
        if video.created_at.is_not_set() {
            video.created_at = Set(chrono::Utc::now().naive_utc());
        }
        Entity::insert(video)
            .exec_with_returning(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create video"))
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, id: Uuid, mut video: ActiveModel) -> Result<Model, DbErr> {
        video.id = Unchanged(id);
        video.update(conn).await
    }

    /// Returns `false` when there was no video with that id.
    pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(conn).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(conn).await?.rows_affected)
    }

    /// Atomic `views = views + 1`. Returns `false` when the video does not exist.
    pub async fn increment_views<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Views, increment(Column::Views))
            .filter(Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
