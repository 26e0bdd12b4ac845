//! # Failure Notification
//!
//! The original frontend raised a blocking alert from inside the HTTP layer on
//! every failure. Here the notification sink is injectable so the decision
//! "is this failure worth interrupting the user" belongs to the call site:
//! each API wrapper either notifies or goes through the silent path, and the
//! session store's startup check never spams the user about an expired token.

use crate::core::ApiError;

/// Sink for user-visible failure notifications.
///
/// Implementations must not block: they are called from async request paths.
pub trait Notifier: Send + Sync {
    /// Report a failed request to the user.
    fn notify(&self, error: &ApiError);
}

/// Default notifier that records failures through `tracing` instead of
/// interrupting anyone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, error: &ApiError) {
        tracing::warn!(error = %error, "API request failed");
    }
}
