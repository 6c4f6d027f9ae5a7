use dbdcare_entity::checklist_item::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, mut item: ActiveModel) -> Result<Model, DbErr> {
        if item.id.is_not_set() {
            item.id = Set(Uuid::new_v4());
        }
        if item.created_at.is_not_set() {
            item.created_at = Set(chrono::Utc::now().naive_utc());
        }
        Entity::insert(item).exec_with_returning(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, id: Uuid, mut item: ActiveModel) -> Result<Model, DbErr> {
        item.id = Unchanged(id);
        item.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(conn).await?;
        Ok(res.rows_affected > 0)
    }
}
