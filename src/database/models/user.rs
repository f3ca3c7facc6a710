use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Account role. Maps to the `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn can_administer(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Full user row. Internal to the database and login layers; the password
/// hash never leaves them, so this type deliberately does not implement
/// `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub user_name: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The only user shape handlers return: no password, no role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPublic {
    pub id: Uuid,
    pub user_name: Option<String>,
    pub email: String,
}

/// Registration payload
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub user_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Self-service update payload. `id` is only echoed back in the response,
/// never used as the update target; the target always comes from the
/// authenticated context.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub id: Option<Uuid>,
    pub user_name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_projection_has_no_password_or_role() {
        let user = UserPublic {
            id: Uuid::new_v4(),
            user_name: Some("Kissa Fan".to_string()),
            email: "kissa@example.com".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| *k == "password"));
        assert!(!keys.iter().any(|k| *k == "role"));
    }

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
        assert!(!Role::User.can_administer());
        assert!(Role::Admin.can_administer());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(
            serde_json::from_value::<Role>(serde_json::json!("user")).unwrap(),
            Role::User
        );
    }
}
