use dbdcare_db::util::TransactionResultExt;
use dbdcare_entity::access_tokens::Model as AccessToken;
use dbdcare_entity::user::{Model as User, Role};
use sea_orm::{ConnectionTrait, DbErr, SqlErr, TransactionTrait};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum RegistrationError {
    #[error(transparent)]
    DbErr(#[from] DbErr),

    #[error("Username sudah digunakan")]
    UserExists,
}

/// Creates a user with the plain `user` role and issues its first access token.
pub(crate) async fn register_user<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    username: String,
    password_hash: String,
) -> Result<(User, AccessToken), RegistrationError> {
    conn.transaction::<_, _, RegistrationError>(|txn| {
        Box::pin(async move {
            if dbdcare_db::user::Query::find_by_username(txn, &username).await?.is_some() {
                return Err(RegistrationError::UserExists);
            }
            let user = dbdcare_db::user::Mutation::create_user(txn, username, password_hash, Role::User)
                .await
                .map_err(|error| match error.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => RegistrationError::UserExists,
                    _ => RegistrationError::DbErr(error),
                })?;
            let token = dbdcare_db::access_tokens::Mutation::issue(txn, user.id).await?;
            Ok((user, token))
        })
    })
    .await
    .flatten_res()
}

/// Creates the admin account if no user of that name exists. An existing account is left alone.
pub(crate) async fn ensure_admin<C: ConnectionTrait>(
    conn: &C,
    username: String,
    password_hash: String,
) -> Result<User, DbErr> {
    if let Some(user) = dbdcare_db::user::Query::find_by_username(conn, &username).await? {
        if user.role != Role::Admin {
            tracing::warn!(username = %user.username, "bootstrap admin name is taken by a regular user");
        } else {
            tracing::debug!(username = %user.username, "admin account exists");
        }
        return Ok(user);
    }
    let user = dbdcare_db::user::Mutation::create_user(conn, username, password_hash, Role::Admin).await?;
    tracing::info!(username = %user.username, "created admin account");
    Ok(user)
}
