use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceMemberRole {
    Owner,
    Admin,
    Finance,
    Checker,
    Operations,
    Developer,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMember {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub image_url: Option<String>,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    pub role: InstanceMemberRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstanceInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_invite_redirect_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInstanceMemberRoleInput {
    pub member_id: String,
    pub role: InstanceMemberRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_member() {
        let member: InstanceMember = serde_json::from_value(json!({
            "id": "us_000000000000",
            "email": "email@example.com",
            "first_name": "Harry",
            "middle_name": "James",
            "last_name": "Potter",
            "image_url": "https://example.com/image.png",
            "created_at": "2021-01-01T00:00:00Z",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(member.role, InstanceMemberRole::Admin);
        assert_eq!(member.middle_name.as_deref(), Some("James"));
    }

    #[test]
    fn test_unknown_role_fails() {
        let result = serde_json::from_value::<InstanceMember>(json!({
            "id": "us_1", "email": "e", "first_name": "f", "last_name": "l",
            "created_at": "2021-01-01T00:00:00Z", "role": "superuser"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_input_omits_unset_redirect() {
        let input = UpdateInstanceInput {
            name: "Production".to_string(),
            receiver_invite_redirect_url: None,
        };
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({"name": "Production"}));
    }
}
