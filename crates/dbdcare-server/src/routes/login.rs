use crate::db;
use crate::routes::error::{ErrorBody, LoginError};
use crate::user::ExtractUser;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use dbdcare_core::password::{hash_password, verify_password};
use dbdcare_core::validation::{normalize_username, validate_registration};
use dbdcare_db::{access_tokens, user};
use dbdcare_model::login::{Credentials, Registration, Token};
use dbdcare_model::user::User;
use dbdcare_model_tools::convert::IntoModel;
use http::StatusCode;
use sea_orm::DatabaseConnection;
use std::error::Error;

pub fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/whoami", get(whoami))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/api/v0/auth/register",
    request_body = Registration,
    responses(
        (status = OK, description = "Account created, returns its Bearer token", body = Token),
        (status = BAD_REQUEST, description = "Username or password rejected", body = ErrorBody),
        (status = CONFLICT, description = "Username taken", body = ErrorBody),
    ),
    tag = "auth"
)]
pub(crate) async fn register(
    Extension(conn): Extension<DatabaseConnection>,
    Json(registration): Json<Registration>,
) -> Result<Response, LoginError> {
    let username = validate_registration(
        &normalize_username(&registration.username),
        &registration.password,
        &registration.confirm_password,
    )?;
    let password_hash = hash_password(&registration.password)?;

    let (user, token) = db::sea_orm::user::register_user(&conn, username, password_hash).await?;
    tracing::info!(username = %user.username, "registered user");

    Ok(Json(Token {
        access_token: token.access_token,
        user: user.into_model(),
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/auth/login",
    request_body = Credentials,
    responses(
        (status = OK, description = "Successful login, returns Bearer token", body = Token),
        (status = UNAUTHORIZED, description = "Unknown username or wrong password", body = ErrorBody),
    ),
    tag = "auth"
)]
pub(crate) async fn login(
    Extension(conn): Extension<DatabaseConnection>,
    Json(credentials): Json<Credentials>,
) -> Result<Response, LoginError> {
    let username = normalize_username(&credentials.username);
    let user = user::Query::find_by_username(&conn, &username)
        .await?
        .ok_or(LoginError::UnknownUser)?;

    if !verify_password(&credentials.password, &user.password)? {
        tracing::debug!(username = %user.username, "wrong password");
        return Err(LoginError::WrongPassword);
    }

    let token = access_tokens::Mutation::issue(&conn, user.id).await?;
    tracing::debug!(username = %user.username, "user logged in");

    Ok(Json(Token {
        access_token: token.access_token,
        user: user.into_model(),
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/auth/whoami",
    responses(
        (status = OK, description = "The logged in user", body = User),
        (status = UNAUTHORIZED, description = "No valid token", body = ErrorBody),
    ),
    tag = "auth",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn whoami(ExtractUser(user): ExtractUser) -> Json<User> {
    Json(user)
}

#[utoipa::path(
    post,
    path = "/api/v0/auth/logout",
    responses(
        (status = NO_CONTENT, description = "User Logged out successfully"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to delete access token")
    ),
    tag = "auth",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn logout(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> impl IntoResponse {
    if let Err(error) = access_tokens::Mutation::revoke(&conn, user.id).await {
        tracing::error!(
            user = %user.id,
            error = &error as &dyn Error,
            "failed to delete access token"
        );
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    tracing::debug!(user = %user.id, "user logged out");
    StatusCode::NO_CONTENT
}
