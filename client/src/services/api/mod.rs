//! # Backend API Client Module
//!
//! HTTP client for communicating with the Enfor CRM backend. Handles
//! authentication, property listings, CRM clients, appointments, and file
//! upload. No other module performs HTTP requests.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct and the request chokepoint
//! ├── auth.rs         - Authentication endpoints (signup, login, me, logout)
//! ├── properties.rs   - Property listing endpoints
//! ├── clients.rs      - CRM client endpoints
//! ├── appointments.rs - Appointment endpoints
//! └── upload.rs       - Profile photo upload
//! ```

pub mod appointments;
pub mod auth;
pub mod client;
pub mod clients;
pub mod properties;
pub mod upload;

pub use client::ApiClient;
