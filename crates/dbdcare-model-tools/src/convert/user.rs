use crate::convert::{FromDbModel, FromModel};
use dbdcare_entity::user::Model as UserModel;
use dbdcare_entity::user::Role as RoleModel;
use dbdcare_model::user::{Role, User};

impl FromDbModel<RoleModel> for Role {
    fn from_db_model(model: RoleModel) -> Self {
        match model {
            RoleModel::Admin => Self::Admin,
            RoleModel::User => Self::User,
        }
    }
}

impl FromModel<Role> for RoleModel {
    fn from_model(model: Role) -> Self {
        match model {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            role: FromDbModel::from_db_model(model.role),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;

    #[test]
    fn test_password_is_not_exposed() {
        let model = UserModel {
            id: uuid::Uuid::new_v4(),
            username: "budi".to_owned(),
            password: "salt$hash".to_owned(),
            role: RoleModel::Admin,
            created_at: chrono::NaiveDateTime::default(),
        };
        let user: User = model.into_model();
        assert!(user.is_admin());
        assert!(!serde_json::to_string(&user).unwrap().contains("hash"));
    }
}
