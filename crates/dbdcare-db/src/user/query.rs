use dbdcare_entity::access_tokens::{Column as AccessTokenColumn, Entity as AccessToken};
use dbdcare_entity::user::{Column, Entity as UserEntity, Model as User};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<User>, DbErr> {
        UserEntity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "error loading user");
        })
    }

    /// Usernames are stored lowercased, callers pass the normalized form.
    pub async fn find_by_username<C: ConnectionTrait>(conn: &C, username: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "error loading user by name");
            })
    }

    pub async fn find_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .inner_join(AccessToken)
            .filter(AccessTokenColumn::AccessToken.eq(token))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "error finding user by token");
            })
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        UserEntity::find().count(conn).await
    }

    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<User>, DbErr> {
        UserEntity::find().order_by_asc(Column::Username).all(conn).await
    }
}
