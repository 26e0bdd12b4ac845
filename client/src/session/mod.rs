//! # Session Lifecycle
//!
//! Owns the authenticated identity and session token. The session store is
//! the only writer of the persisted token and identity snapshot; everything
//! else treats them as read-only derived state.
//!
//! - [`store`] - `SessionStore` and the `Initializing`/`Anonymous`/
//!   `Authenticated` state machine
//! - [`storage`] - `SessionStorage` persistence trait with file-backed and
//!   in-memory implementations
//! - [`identity`] - client-side representation of the authenticated user

pub mod identity;
pub mod storage;
pub mod store;

pub use identity::Identity;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
pub use store::{SessionState, SessionStore};
