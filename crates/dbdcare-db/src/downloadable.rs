//! Posters and leaflets share one shape: a titled file with a download counter.

macro_rules! downloadable_collection {
    ($name:ident) => {
        pub mod $name {
            use dbdcare_entity::$name::{ActiveModel, Column, Entity, Model};
            use sea_orm::ActiveValue::{Set, Unchanged};
            use sea_orm::{
                ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
                QueryOrder,
            };
            use std::error::Error;
            use uuid::Uuid;

            pub struct Query;

            impl Query {
                pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
                    Entity::find()
                        .order_by_desc(Column::CreatedAt)
                        .all(conn)
                        .await
                        .inspect_err(|error| {
                            tracing::error!(
                                error = error as &dyn Error,
                                collection = stringify!($name),
                                "failed to load collection"
                            )
                        })
                }

                pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Model>, DbErr> {
                    Entity::find_by_id(id).one(conn).await
                }

                pub async fn find_by_title<C: ConnectionTrait>(conn: &C, title: &str) -> Result<Option<Model>, DbErr> {
                    Entity::find().filter(Column::Title.eq(title)).one(conn).await
                }

                pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
                    Entity::find().count(conn).await
                }
            }

            pub struct Mutation;

            impl Mutation {
                pub async fn create<C: ConnectionTrait>(conn: &C, mut model: ActiveModel) -> Result<Model, DbErr> {
                    if model.id.is_not_set() {
                        model.id = Set(Uuid::new_v4());
                    }
                    if model.downloads.is_not_set() {
                        model.downloads = Set(0);
                    }
                    if model.created_at.is_not_set() {
                        model.created_at = Set(chrono::Utc::now().naive_utc());
                    }
                    Entity::insert(model).exec_with_returning(conn).await
                }

                pub async fn update<C: ConnectionTrait>(
                    conn: &C,
                    id: Uuid,
                    mut model: ActiveModel,
                ) -> Result<Model, DbErr> {
                    model.id = Unchanged(id);
                    model.update(conn).await
                }

                pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
                    let res = Entity::delete_by_id(id).exec(conn).await?;
                    Ok(res.rows_affected > 0)
                }

                pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
                    Ok(Entity::delete_many().exec(conn).await?.rows_affected)
                }

                /// Atomic `downloads = downloads + 1`.
                pub async fn increment_downloads<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
                    let res = Entity::update_many()
                        .col_expr(Column::Downloads, crate::util::increment(Column::Downloads))
                        .filter(Column::Id.eq(id))
                        .exec(conn)
                        .await?;
                    Ok(res.rows_affected > 0)
                }
            }
        }
    };
}

downloadable_collection!(poster);
downloadable_collection!(leaflet);
