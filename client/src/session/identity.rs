//! # Identity
//!
//! Client-side representation of the currently authenticated user, decoded
//! once at the wire boundary from [`PublicUser`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{PublicUser, UserRole};

/// The authenticated user as held by the session store.
///
/// Exists if and only if a valid session token is present; the two are
/// created and destroyed together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    /// Display name derived from the wire first/last name.
    pub name: String,
    pub role: UserRole,
    pub city: String,
    pub state: String,
    /// Organization or firm; the backend sends an empty string when unset.
    pub firm_name: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PublicUser> for Identity {
    fn from(user: PublicUser) -> Self {
        let name = format!("{} {}", user.first_name, user.last_name)
            .trim()
            .to_string();
        Self {
            id: user.id,
            email: user.email,
            name,
            role: user.role,
            city: user.city,
            state: user.state,
            firm_name: Some(user.firm_name).filter(|firm| !firm.is_empty()),
            profile_image: user.profile_image,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_user() -> PublicUser {
        PublicUser {
            id: "u1".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "broker@example.com".to_string(),
            firm_name: "Smith Properties".to_string(),
            role: UserRole::Broker,
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            is_verified: true,
            profile_image: None,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn name_is_derived_from_first_and_last() {
        let identity = Identity::from(wire_user());
        assert_eq!(identity.name, "John Smith");
        assert_eq!(identity.firm_name.as_deref(), Some("Smith Properties"));
    }

    #[test]
    fn empty_firm_name_becomes_none() {
        let mut user = wire_user();
        user.firm_name = String::new();
        assert!(Identity::from(user).firm_name.is_none());
    }
}
