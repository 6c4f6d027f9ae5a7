use crate::access_tokens::Query;
use crate::util::TransactionResultExt;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dbdcare_entity::access_tokens::{ActiveModel, Column, Entity, Model};
use ring::rand::{SecureRandom, SystemRandom};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::TransactionTrait;

/// Tokens are the standard base64 encoding of this many random bytes.
const TOKEN_BYTES: usize = 64;

fn generate_token() -> Result<String, DbErr> {
    let mut bytes = [0u8; TOKEN_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| DbErr::Custom("no randomness available for an access token".to_owned()))?;
    Ok(STANDARD.encode(bytes))
}

pub struct Mutation;

impl Mutation {
    /// One token per user: the stored one is handed out again until it is revoked.
    pub async fn issue<C: TransactionTrait>(conn: &C, user_id: Uuid) -> Result<Model, DbErr> {
        let access_token = generate_token()?;
        conn.transaction(|txn| {
            Box::pin(async move {
                if let Some(existing) = Query::find_by_user(txn, user_id).await? {
                    return Ok(existing);
                }
                let token = ActiveModel {
                    user_id: Set(user_id),
                    access_token: Set(access_token),
                    created_at: Set(chrono::Utc::now().naive_utc()),
                    ..Default::default()
                };
                Entity::insert(token).exec_with_returning(txn).await
            })
        })
        .await
        .log_transaction_err("failed to issue access token")
        .flatten_res()
    }

    /// Returns how many tokens were removed.
    pub async fn revoke<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        let res = Entity::delete_many().filter(Column::UserId.eq(user_id)).exec(conn).await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_base64_of_64_random_bytes() {
        let token = generate_token().unwrap();
        assert_eq!(token.len(), 88);
        assert!(token.ends_with("=="));
        let bytes = STANDARD.decode(&token).unwrap();
        assert_eq!(bytes.len(), 64);
        assert!(bytes.iter().any(|&b| b != 0));
        assert_ne!(token, generate_token().unwrap());
    }
}
