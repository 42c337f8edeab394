use crate::enums::user::{UserRole, UserStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User account information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    #[serde(with = "pressmill_codec::wire_field")]
    pub role: UserRole,
    #[serde(with = "pressmill_codec::wire_field")]
    pub status: UserStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating an account
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(with = "pressmill_codec::wire_field")]
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_travels_as_an_integer_and_status_as_a_name() {
        let account = UserAccount {
            id: 5,
            username: "mira".into(),
            email: None,
            role: UserRole::Editor,
            status: UserStatus::Active,
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(account).unwrap();
        assert_eq!(value["role"], json!(1));
        assert_eq!(value["status"], json!("active"));
    }

    #[test]
    fn role_reads_accept_integers_and_wrapped_integers() {
        let from_int: NewUser =
            serde_json::from_value(json!({"username": "mira", "role": 2})).unwrap();
        assert_eq!(from_int.role, UserRole::Admin);

        let from_string: NewUser =
            serde_json::from_value(json!({"username": "mira", "role": "2"})).unwrap();
        assert_eq!(from_string.role, UserRole::Admin);
    }
}
