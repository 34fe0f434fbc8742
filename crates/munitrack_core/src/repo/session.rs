//! Shared bearer-credential handle.
//!
//! # Responsibility
//! - Hold the signed-in user's bearer token behind an explicit, cloneable
//!   handle instead of process-global storage.
//!
//! # Invariants
//! - The token is read at request time: replacing it affects subsequent
//!   operations immediately but never ones already in flight.
//! - Absence of a token is not an error here; requests go out without an
//!   `Authorization` header and the server decides.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Cloneable handle to the current bearer credential.
///
/// Every endpoint constructed from one `Session` observes the same token;
/// cloning the handle shares it, it does not snapshot it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Creates a session with no credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already holding a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Replaces the bearer token for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.write_guard() = Some(token.into());
    }

    /// Clears the credential; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.write_guard() = None;
    }

    /// Returns a snapshot of the current token.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }
}
