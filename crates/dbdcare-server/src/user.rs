use crate::routes::error::ErrorBody;
use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::{Extension, Json, RequestPartsExt};
use axum_auth::AuthBearer;
use axum_extra::extract::Cached;
use dbdcare_db::user;
use dbdcare_model::user::User;
use dbdcare_model_tools::convert::IntoModel;
use http::StatusCode;
use http::request::Parts;
use sea_orm::DatabaseConnection;
use std::error::Error;
use url::form_urlencoded;

type Rejection = (StatusCode, Json<ErrorBody>);

fn reject(status: StatusCode, message: &'static str) -> Rejection {
    (status, Json(ErrorBody::new(message)))
}

/// `?access_token=` for clients that cannot set headers.
fn token_from_query(parts: &Parts) -> Option<String> {
    form_urlencoded::parse(parts.uri.query()?.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
}

async fn bearer_token(parts: &mut Parts) -> Option<String> {
    match parts.extract::<AuthBearer>().await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => token_from_query(parts),
    }
}

/// The resolved account, cached per request so the token is looked up once.
#[derive(Clone)]
struct Authenticated(User);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .await
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "No authentication token provided"))?;

        let Extension(conn) = parts
            .extract::<Extension<DatabaseConnection>>()
            .await
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "database connection not found in app data");
                reject(StatusCode::INTERNAL_SERVER_ERROR, "Database Connection not found")
            })?;

        let account = user::Query::find_by_token(&conn, &token)
            .await
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "failed to look up access token");
                reject(StatusCode::INTERNAL_SERVER_ERROR, "Error loading user")
            })?
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "Authentication failed."))?;

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(account.id.as_hyphenated().to_string()),
                username: Some(account.username.clone()),
                ..Default::default()
            }));
        });

        Ok(Self(account.into_model()))
    }
}

/// The user behind the bearer token. Rejects with 401 when there is no valid token.
#[derive(Clone)]
pub(crate) struct ExtractUser(pub User);

impl<S> FromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Cached(Authenticated(user)) = Cached::<Authenticated>::from_request_parts(parts, state).await?;
        Ok(Self(user))
    }
}

/// Anonymous when the token is missing or unknown.
impl<S> OptionalFromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        Ok(<Self as FromRequestParts<S>>::from_request_parts(parts, state).await.ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use test_log::test;

    fn parts(uri: &str) -> Parts {
        Request::builder().uri(uri).body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_token_from_query() {
        let parts = parts("/api/v0/auth/whoami?x=1&access_token=abc%2Bdef%3D%3D");
        assert_eq!(token_from_query(&parts).as_deref(), Some("abc+def=="));
    }

    #[test]
    fn test_no_token_in_query() {
        assert_eq!(token_from_query(&parts("/api/v0/home")), None);
        assert_eq!(token_from_query(&parts("/api/v0/home?search=dbd")), None);
    }

    #[test(tokio::test)]
    async fn test_header_wins_over_query() {
        let mut parts = Request::builder()
            .uri("/api/v0/auth/whoami?access_token=from-query")
            .header(http::header::AUTHORIZATION, "Bearer from-header")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        assert_eq!(bearer_token(&mut parts).await.as_deref(), Some("from-header"));
    }
}
