use serde::{Deserialize, Serialize};

use crate::validation::{validate_avatar_url, validate_email, validate_name};

/// Represents a user of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier, generated at creation time
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address, unique case-insensitively
    pub email: String,
    /// Access role
    pub role: Role,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// User role enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "editor" => Role::Editor,
            _ => Role::Viewer,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_string(),
            Role::Editor => "editor".to_string(),
            Role::Viewer => "viewer".to_string(),
        }
    }
}

impl User {
    /// Deterministic placeholder avatar derived from a seed value.
    pub fn placeholder_avatar(seed: &str) -> String {
        format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
    }

    /// Check if the user holds the admin role
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Request to create a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Access role
    pub role: Role,
    /// Avatar URL (optional; a placeholder is derived when absent)
    pub avatar: Option<String>,
}

/// Request to update a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name (optional)
    pub name: Option<String>,
    /// New email address (optional)
    pub email: Option<String>,
    /// New role (optional)
    pub role: Option<Role>,
    /// New avatar URL (optional)
    pub avatar: Option<String>,
}

impl CreateUserRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;

        if let Some(ref avatar) = self.avatar {
            validate_avatar_url(avatar)?;
        }

        Ok(())
    }
}

impl UpdateUserRequest {
    /// Validate the update request
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }

        if let Some(ref email) = self.email {
            validate_email(email)?;
        }

        if let Some(ref avatar) = self.avatar {
            validate_avatar_url(avatar)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("editor"), Role::Editor);
        assert_eq!(Role::from("viewer"), Role::Viewer);
        assert_eq!(Role::from("ADMIN"), Role::Admin);
        assert_eq!(Role::from("unknown"), Role::Viewer);

        assert_eq!(String::from(Role::Admin), "admin");
        assert_eq!(String::from(Role::Editor), "editor");
        assert_eq!(String::from(Role::Viewer), "viewer");
    }

    #[test]
    fn test_role_serde_round_trip() {
        let serialized = serde_json::to_string(&Role::Editor).unwrap();
        assert_eq!(serialized, "\"editor\"");

        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn test_placeholder_avatar_is_deterministic() {
        let a = User::placeholder_avatar("abc");
        let b = User::placeholder_avatar("abc");
        assert_eq!(a, b);
        assert!(a.starts_with("https://"));
        assert!(a.ends_with("seed=abc"));
    }

    #[test]
    fn test_is_admin() {
        let user = User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            avatar: None,
        };
        assert!(user.is_admin());

        let viewer = User { role: Role::Viewer, ..user };
        assert!(!viewer.is_admin());
    }

    #[test]
    fn test_create_request_validation() {
        let valid = CreateUserRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role: Role::Viewer,
            avatar: Some("https://example.com/avatar.jpg".to_string()),
        };
        assert!(valid.validate().is_ok());

        let invalid_email = CreateUserRequest {
            email: "invalid-email".to_string(),
            ..valid.clone()
        };
        assert!(invalid_email.validate().is_err());

        let empty_name = CreateUserRequest {
            name: "".to_string(),
            ..valid.clone()
        };
        assert!(empty_name.validate().is_err());

        let bad_avatar = CreateUserRequest {
            avatar: Some("not-a-url".to_string()),
            ..valid
        };
        assert!(bad_avatar.validate().is_err());
    }

    #[test]
    fn test_update_request_validation() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let rename = UpdateUserRequest {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert!(rename.validate().is_ok());

        let bad_email = UpdateUserRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());
    }
}
