use crate::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Credentials {
    #[schema(example = "budi")]
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Registration {
    #[schema(example = "budi")]
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Issued on login and registration. The token is sent back as `Authorization: Bearer`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub access_token: String,
    pub user: User,
}
