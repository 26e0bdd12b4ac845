//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the Enfor CRM client SDK and
//! the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{message, data?, error?}` response envelope
//!   - **[`dto::auth`]**: Authentication and user DTOs
//!   - **[`dto::property`]**: Property listing DTOs
//!   - **[`dto::client`]**: CRM client (lead) DTOs
//!   - **[`dto::appointment`]**: Appointment scheduling DTOs
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in
//!   JSON by default
//! - Optional fields are omitted from JSON when `None` (using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Closed string sets (roles, property types, statuses) are modeled as enums
//!   with `#[serde(rename_all = "snake_case")]`; unrecognized values are a
//!   deserialization error, never passed through
//! - Timestamps are RFC 3339 strings decoded into `chrono::DateTime<Utc>`

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
