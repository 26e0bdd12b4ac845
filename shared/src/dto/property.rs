//! # Property Listing Data Transfer Objects
//!
//! Structures for the `/properties` endpoints. Classification strings the
//! backend validates as fixed sets are modeled as enums here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of property being listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    Plot,
}

/// Whether the listing is for sale or rent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Sold,
    Rented,
    UnderNegotiation,
}

/// A property listing as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub price: f64,
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub status: PropertyStatus,
    pub broker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePropertyRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub price: f64,
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub description: String,
    pub amenities: Vec<String>,
}

/// Request body for updating an existing listing; every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdatePropertyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<ListingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_uses_wire_field_name() {
        let request = CreatePropertyRequest {
            title: "2BHK Sea-Facing Apartment".to_string(),
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Sale,
            price: 25_000_000.0,
            area: 980.0,
            bedrooms: Some(2),
            bathrooms: Some(2),
            location: "Bandra West".to_string(),
            address: "14 Hill Road, Bandra West".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            description: "Sea-facing apartment with two balconies and parking.".to_string(),
            amenities: vec!["parking".to_string(), "lift".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "apartment");
        assert_eq!(json["listing_type"], "sale");
    }

    #[test]
    fn status_under_negotiation_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&PropertyStatus::UnderNegotiation).unwrap(),
            r#""under_negotiation""#
        );
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let json = serde_json::to_string(&UpdatePropertyRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
