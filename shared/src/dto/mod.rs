//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between the
//! client SDK and the backend REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - The response envelope every endpoint returns
//! - [`auth`] - Signup, login, and user profile DTOs
//! - [`property`] - Property listing DTOs
//! - [`client`] - CRM client (lead) DTOs
//! - [`appointment`] - Appointment scheduling DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "broker@example.com", "password": "password123" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "message": "Login successful",
//!   "data": {
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "user": {
//!       "id": "7f9c0e4a-...",
//!       "first_name": "John",
//!       "last_name": "Smith",
//!       "email": "broker@example.com",
//!       "firm_name": "Smith Properties",
//!       "role": "broker",
//!       "city": "Mumbai",
//!       "state": "Maharashtra",
//!       "is_verified": true,
//!       "created_at": "2024-01-01T00:00:00Z"
//!     }
//!   }
//! }
//! ```

pub mod appointment;
pub mod auth;
pub mod client;
pub mod envelope;
pub mod property;

pub use appointment::*;
pub use auth::*;
pub use client::*;
pub use envelope::*;
pub use property::*;
