//! Admin profile model backing `admin_id.json`.

use serde::{Deserialize, Serialize};

/// The singleton administrator profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub admin_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    /// Keys not modelled here, written back unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Request body for changing the admin profile picture.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePicRequest {
    pub admin_id: String,
    pub profile_pic: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_pic_omitted_when_absent() {
        let profile = AdminProfile {
            admin_id: "A-1".to_string(),
            profile_pic: None,
            extra: serde_json::Map::new(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({ "admin_id": "A-1" }));
    }

    #[test]
    fn test_profile_parses_without_pic() {
        let profile: AdminProfile = serde_json::from_str(r#"{"admin_id": "42"}"#).unwrap();
        assert_eq!(profile.admin_id, "42");
        assert!(profile.profile_pic.is_none());
    }
}
