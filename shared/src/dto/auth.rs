//! # Authentication Data Transfer Objects
//!
//! Request and response structures for signup, login, the current-user lookup,
//! and profile photo upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// This is a closed set at the wire boundary: decoding any other string is a
/// deserialization error rather than a pass-through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Broker,
    ChannelPartner,
    Admin,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
///
/// Mirrors the backend's registration form; optional contact numbers are
/// omitted from the JSON body when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub firm_name: String,
    pub role: UserRole,
    pub whatsapp_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_number: Option<String>,
    pub address: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// User profile as the backend exposes it to clients (no credentials).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub firm_name: String,
    pub role: UserRole,
    pub city: String,
    pub state: String,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload under `data` for successful login and signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthData {
    pub token: String,
    pub user: PublicUser,
}

/// Payload under `data` after a profile photo upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfilePhotoData {
    pub profile_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::ChannelPartner).unwrap(),
            r#""channel_partner""#
        );
        let role: UserRole = serde_json::from_str(r#""broker""#).unwrap();
        assert_eq!(role, UserRole::Broker);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_str::<UserRole>(r#""superuser""#);
        assert!(result.is_err());
    }

    #[test]
    fn signup_request_omits_absent_optional_numbers() {
        let request = SignupRequest {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            firm_name: "AB Estates".to_string(),
            role: UserRole::Broker,
            whatsapp_number: "9999999999".to_string(),
            alternative_number: None,
            foreign_number: None,
            address: "12 Marine Drive, Mumbai".to_string(),
            location: "Marine Drive".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            postal_code: "400001".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("alternative_number"));
        assert!(!json.contains("foreign_number"));
        assert!(json.contains(r#""role":"broker""#));
    }
}
