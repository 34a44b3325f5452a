use serde::{Deserialize, Serialize};

/// Role of an authenticated user. Gates which dashboard and menu render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "teacher" => UserRole::Teacher,
            "admin" => UserRole::Admin,
            _ => UserRole::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable role label shown next to the avatar.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
            UserRole::Admin => "Administrator",
        }
    }
}

/// The authenticated user, as returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub meet_link: Option<String>,
}

impl User {
    /// First word of the display name, used in dashboard greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_round_trips_through_serde() {
        let json = serde_json::to_string(&UserRole::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
        let back: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, UserRole::Admin);
    }

    #[test]
    fn unknown_role_string_defaults_to_student() {
        assert_eq!(UserRole::from_str_or_default("superuser"), UserRole::Student);
    }

    #[test]
    fn user_deserializes_with_missing_optionals() {
        let user: User = serde_json::from_str(
            r#"{"user_id":"u1","email":"a@b.co","name":"Ada Lovelace","role":"student"}"#,
        )
        .unwrap();
        assert_eq!(user.picture, None);
        assert_eq!(user.first_name(), "Ada");
    }
}
