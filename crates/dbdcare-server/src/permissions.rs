use crate::user::ExtractUser;
use axum::RequestExt;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use dbdcare_model::user::Role;
use serde_derive::Serialize;
use std::collections::HashSet;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
pub(crate) enum Permission {
    /// Any logged in account.
    Basic,
    /// Content management, analytics and maintenance.
    Admin,
}

/// What a role may do. Admins keep every user permission.
fn granted(role: Role) -> HashSet<Permission> {
    match role {
        Role::Admin => HashSet::from([Permission::Basic, Permission::Admin]),
        Role::User => HashSet::from([Permission::Basic]),
    }
}

/// Grants for `protect-axum`. Anonymous requests get none, so protected handlers answer 403
/// unless the handler's own `ExtractUser` rejects first with 401.
pub(crate) async fn extract(request: &mut Request) -> Result<HashSet<Permission>, Response> {
    let user = request
        .extract_parts::<Option<ExtractUser>>()
        .await
        .map_err(IntoResponse::into_response)?;
    Ok(user.map(|ExtractUser(user)| granted(user.role)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        let admin = granted(Role::Admin);
        assert!(admin.contains(&Permission::Admin));
        assert!(admin.contains(&Permission::Basic));

        assert_eq!(granted(Role::User), HashSet::from([Permission::Basic]));
    }
}
