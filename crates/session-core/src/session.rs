//! Process-wide session holder.
//!
//! One store exists per running client. It is constructed explicitly at
//! startup and passed through application state rather than living in a
//! hidden module-level singleton. The store exclusively owns the current
//! token and derived roles; other components take at most a single
//! synchronous read and never cache a copy.
//!
//! Lifecycle: created empty at startup, populated on successful login,
//! read by every protected view, destroyed on explicit logout or on the
//! first observed authentication failure from the network layer.

use crate::secret::SecretString;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// The current session: raw token plus the roles derived at login.
///
/// The token is held as a [`SecretString`] so any `Debug` formatting of
/// the session redacts it.
#[derive(Debug, Clone)]
pub struct Session {
    /// The raw access token, as persisted at login.
    pub token: SecretString,

    /// Role names derived from the token's claims at login.
    pub roles: HashSet<String>,
}

/// Holder of the current session.
///
/// Each operation is atomic from the caller's perspective; reads observe
/// a `set` immediately, with no staleness window and no interleaved
/// partial writes.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist the token and role set for the remainder of the session.
    pub fn set(&self, token: SecretString, roles: HashSet<String>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Session { token, roles });
        tracing::debug!(target: "session.store", "Session established");
    }

    /// Synchronous read of the current session.
    ///
    /// Returns `None` if no session has been established or after
    /// [`SessionStore::clear`].
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `true` while a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Erase the session. Idempotent: clearing an empty store is a no-op.
    pub fn clear(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            tracing::debug!(target: "session.store", "Session cleared");
        }
    }

    /// Forced-logout hook for observed authentication failures (401).
    ///
    /// Returns `true` only when a live session was actually cleared, so
    /// at most one forced-logout transition fires per observation window;
    /// requests arriving after logout observe an empty store and do not
    /// re-trigger logout actions.
    pub fn handle_unauthorized(&self) -> bool {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            tracing::info!(
                target: "session.store",
                "Authentication failure observed, session force-cleared"
            );
            true
        } else {
            false
        }
    }
}
