//! # Enfor CRM Client SDK - Library Root
//!
//! Client-side session lifecycle and typed API access for the Enfor
//! real-estate CRM backend. This crate owns the two cross-cutting concerns
//! every dashboard and form view depends on:
//!
//! - **[`services::api::ApiClient`]**: the single component permitted to
//!   perform HTTP requests to the backend. Attaches bearer authorization,
//!   normalizes the `{message, data?, error?}` envelope, and distinguishes
//!   transport failures from application failures.
//! - **[`session::SessionStore`]**: owns the authenticated identity and
//!   session token. Persists them across restarts and drives the
//!   `Initializing -> Anonymous / Authenticated` state machine.
//!
//! ## Architecture
//!
//! ```text
//! UI views ──► SessionStore ──► ApiClient ──► backend REST API
//!                  │                │
//!                  ▼                ▼
//!          SessionStorage      Notifier (failure reporting)
//!          (persisted token
//!           + identity cache)
//! ```
//!
//! Views never touch persisted storage or construct HTTP requests directly;
//! they read `SessionStore::identity()` / `is_authenticated()` and call the
//! typed wrappers on [`core::service::ApiService`].
//!
//! ## Module Structure
//!
//! - **core**: error taxonomy and the `ApiService` trait for dependency
//!   injection
//! - **services::api**: `ApiClient` plus one module per backend capability
//!   (auth, properties, clients, appointments, upload)
//! - **session**: `SessionStore`, `SessionStorage` persistence, `Identity`
//! - **config**: base URL and timeout configuration
//! - **notify**: injectable failure-notification callback

pub mod config;
pub mod core;
pub mod notify;
pub mod services;
pub mod session;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use core::{ApiError, ApiService, FieldError, Result};
pub use notify::{LogNotifier, Notifier};
pub use services::api::ApiClient;
pub use session::{Identity, SessionState, SessionStore};
