//! # External Services
//!
//! - [`api`]: HTTP client for the backend REST API

pub mod api;
