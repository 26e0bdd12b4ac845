//! # CRM Client Data Transfer Objects
//!
//! Structures for the `/clients` endpoints. A "client" here is a CRM record
//! (buyer, seller, tenant, or owner lead) tracked by a broker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a CRM client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    Buyer,
    Seller,
    Tenant,
    Owner,
}

/// Lifecycle status of a CRM client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Converted,
    Inactive,
}

/// A CRM client record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub status: ClientStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    pub preferred_location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub broker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new CRM client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub preferred_location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for updating an existing CRM client; every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_type_uses_wire_field_name() {
        let json = serde_json::json!({
            "id": "c1",
            "first_name": "Priya",
            "last_name": "Sharma",
            "email": "priya@example.com",
            "phone": "9888877777",
            "type": "buyer",
            "status": "active",
            "preferred_location": "Andheri East",
            "address": "3 MG Road, Andheri East",
            "city": "Mumbai",
            "state": "Maharashtra",
            "postal_code": "400069",
            "requirements": "2BHK under 1.5cr",
            "broker_id": "b1",
            "created_at": "2024-03-10T08:30:00Z",
            "updated_at": "2024-03-10T08:30:00Z"
        });
        let client: Client = serde_json::from_value(json).unwrap();
        assert_eq!(client.client_type, ClientType::Buyer);
        assert_eq!(client.status, ClientStatus::Active);
        assert!(client.budget_min.is_none());
    }

    #[test]
    fn unknown_client_status_is_rejected() {
        assert!(serde_json::from_str::<ClientStatus>(r#""archived""#).is_err());
    }
}
