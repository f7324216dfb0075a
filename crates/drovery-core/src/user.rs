//! Authenticated user identity.

use serde::{Deserialize, Serialize};

/// The user identity attached to a successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuthUser {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_name() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id":"u1","email":"ada@example.com"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, None);
    }

    #[test]
    fn serializes_without_name_field_when_absent() {
        let user = AuthUser::new("u1", "ada@example.com", None);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("name"));
    }
}
