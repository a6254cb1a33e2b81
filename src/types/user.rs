//! User entity.

use super::{StringMap, UserId};
use serde::{Deserialize, Serialize};

/// Literal user id accepted by the server for "the authenticated user"
pub const ME: &str = "me";

/// A platform account.
///
/// `password` and `auth_data` are only populated on create/update paths;
/// the server never echoes them back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: UserId,
    /// Creation timestamp (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<i64>,
    /// Last update timestamp (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<i64>,
    /// Deletion timestamp (epoch ms, 0 = live)
    #[serde(default)]
    pub delete_at: i64,
    /// Login name
    pub username: String,
    /// Password, create/update paths only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// External auth data, create/update paths only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<String>,
    /// Auth service (e.g. `email`, `ldap`)
    #[serde(default)]
    pub auth_service: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Whether the email is verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Nickname
    #[serde(default)]
    pub nickname: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Position
    #[serde(default)]
    pub position: String,
    /// Space-separated role names
    #[serde(default)]
    pub roles: String,
    /// Marketing opt-in flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_marketing: Option<bool>,
    /// Free-form user properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<StringMap>,
    /// Notification preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_props: Option<StringMap>,
    /// Last password update (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_password_update: Option<i64>,
    /// Last picture update (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_picture_update: Option<i64>,
    /// Failed login attempts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_attempts: Option<i32>,
    /// Locale code
    #[serde(default)]
    pub locale: String,
    /// Timezone settings
    #[serde(default)]
    pub timezone: StringMap,
    /// Whether MFA is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_active: Option<bool>,
    /// MFA secret, create/update paths only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_secret: Option<String>,
    /// Remote cluster id for shared users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    /// Last activity timestamp (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<i64>,
    /// Whether the account is a bot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    /// Bot description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_description: Option<String>,
    /// Bot icon update timestamp (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_last_icon_update: Option<i64>,
    /// Accepted terms-of-service id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service_id: Option<String>,
    /// Terms-of-service acceptance timestamp (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service_create_at: Option<i64>,
    /// Whether the welcome email is suppressed
    #[serde(default)]
    pub disable_welcome_email: bool,
}

impl User {
    /// Whether the account is a bot
    pub fn is_bot(&self) -> bool {
        self.is_bot.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_server_payload() {
        let json = r#"{
            "id": "ah7xszu5m3d93e3yzk9yijs1hw",
            "create_at": 1614600000000,
            "update_at": 1614700000000,
            "delete_at": 0,
            "username": "alice",
            "auth_service": "",
            "email": "alice@example.com",
            "nickname": "",
            "first_name": "Alice",
            "last_name": "Doe",
            "position": "",
            "roles": "system_user",
            "locale": "en",
            "timezone": {"automaticTimezone": "Europe/Paris", "useAutomaticTimezone": "true", "manualTimezone": ""}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "ah7xszu5m3d93e3yzk9yijs1hw");
        assert_eq!(user.username, "alice");
        assert_eq!(user.roles, "system_user");
        assert!(!user.is_bot());
        assert_eq!(
            user.timezone.get("automaticTimezone").map(String::as_str),
            Some("Europe/Paris")
        );
    }

    #[test]
    fn test_password_never_serialized_when_absent() {
        let user = User {
            id: UserId::new("u1"),
            username: "bob".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("mfa_secret"));
    }
}
