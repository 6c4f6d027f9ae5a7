use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[schema(example = "budi")]
    pub username: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_role() {
        assert_eq!(r#""admin""#, serde_json::to_string(&Role::Admin).unwrap());
        assert_eq!(r#""user""#, serde_json::to_string(&Role::User).unwrap());
        assert_eq!(Role::User, serde_json::from_str(r#""user""#).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!("admin", Role::Admin.to_string());
        assert_eq!("user", Role::User.as_ref());
    }
}
