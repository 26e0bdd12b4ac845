//! # Session Persistence
//!
//! Durable storage for the session token and the identity snapshot, stored
//! under the fixed keys `enfor_token` and `enfor_user`. Only the session
//! store reads or writes this.
//!
//! Writes are infallible from the caller's perspective: a logout must never
//! get stuck on a failed disk write, so IO errors are logged and swallowed.

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// On-disk document holding both storage keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(rename = "enfor_token", skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(rename = "enfor_user", skip_serializing_if = "Option::is_none")]
    user: Option<Identity>,
}

/// Durable storage for the session token and identity snapshot.
pub trait SessionStorage: Send + Sync {
    /// Read the persisted token, if any.
    fn load_token(&self) -> Option<String>;

    /// Read the persisted identity snapshot, if any.
    ///
    /// The snapshot is a cache for instant paint only; the live `/auth/me`
    /// response is always the source of truth.
    fn load_identity(&self) -> Option<Identity>;

    /// Persist token and identity together.
    fn store(&self, token: &str, identity: &Identity);

    /// Remove both keys.
    fn clear(&self);
}

/// File-backed storage under the per-user config directory.
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Storage at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default location, `<config_dir>/enfor/session.json`.
    /// Falls back to the current directory when no config dir exists.
    pub fn default_path() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("enfor").join("session.json"))
    }

    fn read(&self) -> PersistedSession {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return PersistedSession::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn write(&self, session: &PersistedSession) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, path = %parent.display(), "failed to create session dir");
                return;
            }
        }
        match serde_json::to_string_pretty(session) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!(error = %e, path = %self.path.display(), "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
    }
}

impl SessionStorage for FileSessionStorage {
    fn load_token(&self) -> Option<String> {
        self.read().token
    }

    fn load_identity(&self) -> Option<Identity> {
        self.read().user
    }

    fn store(&self, token: &str, identity: &Identity) {
        self.write(&PersistedSession {
            token: Some(token.to_string()),
            user: Some(identity.clone()),
        });
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!(error = %e, path = %self.path.display(), "failed to clear session");
            }
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionStorage {
    session: Mutex<PersistedSession>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token, as if a previous run had persisted one.
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.session.lock().token = Some(token.to_string());
        storage
    }

    /// Pre-seed both token and identity snapshot.
    pub fn with_session(token: &str, identity: Identity) -> Self {
        let storage = Self::default();
        *storage.session.lock() = PersistedSession {
            token: Some(token.to_string()),
            user: Some(identity),
        };
        storage
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load_token(&self) -> Option<String> {
        self.session.lock().token.clone()
    }

    fn load_identity(&self) -> Option<Identity> {
        self.session.lock().user.clone()
    }

    fn store(&self, token: &str, identity: &Identity) {
        *self.session.lock() = PersistedSession {
            token: Some(token.to_string()),
            user: Some(identity.clone()),
        };
    }

    fn clear(&self) {
        *self.session.lock() = PersistedSession::default();
    }
}
