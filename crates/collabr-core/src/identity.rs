//! Identity-provider seam.
//!
//! Authentication is delegated to an external identity provider; this crate
//! only defines the contract the data-access layer consumes. The provider
//! owns the session lifecycle (`login`/`logout`) and exposes the current
//! [`Principal`], if any. Login failure is surfaced as a rejected future and
//! is never swallowed downstream.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque unique identifier for an authenticated entity (brand or creator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors surfaced by the external identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider rejected the login attempt (bad credentials, cancelled
    /// flow, expired grant).
    #[error("login rejected by identity provider: {0}")]
    LoginRejected(String),

    /// The provider could not be reached at all.
    #[error("identity provider unreachable: {0}")]
    Unreachable(String),
}

/// External identity provider consumed by the data-access layer.
///
/// Implementations live outside this workspace (browser shell, native shell,
/// test doubles). `principal()` and `is_logging_in()` are synchronous reads
/// of provider-local state; `login`/`logout` drive the remote flow.
pub trait IdentityProvider: Send + Sync {
    /// The currently authenticated principal, or `None` when signed out.
    fn principal(&self) -> Option<Principal>;

    /// `true` while a login flow is in flight. Callers must treat this the
    /// same as "no session": the principal is not yet usable.
    fn is_logging_in(&self) -> bool;

    /// Starts a login flow and resolves to the authenticated principal.
    fn login(&self) -> BoxFuture<'_, Result<Principal, IdentityError>>;

    /// Ends the current session. Idempotent: logging out while signed out
    /// is a no-op.
    fn logout(&self) -> BoxFuture<'_, ()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_round_trips_through_serde() {
        let p = Principal::new("aaaa-bbbb");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"aaaa-bbbb\"");
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn principal_displays_raw_id() {
        assert_eq!(Principal::new("xyz").to_string(), "xyz");
    }
}
