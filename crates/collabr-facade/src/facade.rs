//! The data-access façade.
//!
//! One accessor per remote operation: reads go through the query cache under
//! a deterministic key, mutations dispatch once and invalidate exactly the
//! reads whose remote state they touched. Every accessor resolves the
//! session first and fails fast with [`FacadeError::NoSession`] before any
//! network traffic when none is available. The façade is created at session
//! start and torn down at logout; it is passed explicitly, never ambient.

use std::future::Future;
use std::sync::Arc;

use collabr_api::{ApiError, BackendClient, Method};
use collabr_core::{IdentityProvider, Principal};

use crate::cache::QueryCache;
use crate::error::FacadeError;
use crate::keys::CacheKey;

pub struct Facade {
    pub(crate) client: Arc<BackendClient>,
    identity: Arc<dyn IdentityProvider>,
    pub(crate) cache: QueryCache,
}

impl Facade {
    #[must_use]
    pub fn new(client: Arc<BackendClient>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            client,
            identity,
            cache: QueryCache::new(),
        }
    }

    /// Starts a login flow via the identity provider. Provider rejections
    /// propagate unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::Identity`] when the provider rejects the login.
    pub async fn login(&self) -> Result<Principal, FacadeError> {
        let principal = self.identity.login().await?;
        tracing::debug!(principal = %principal, "session established");
        Ok(principal)
    }

    /// Ends the session and clears every cached read. Cached data is
    /// principal-scoped and must not survive into the next session. Reads
    /// still in flight when this runs are discarded on completion; an
    /// in-flight mutation is not cancelled and still performs its
    /// invalidation when it lands.
    pub async fn logout(&self) {
        self.identity.logout().await;
        self.cache.clear();
        tracing::debug!("session cleared");
    }

    /// Resolves the session requirement for `method` before dispatch.
    ///
    /// A login still in flight counts as "no session": the principal is not
    /// usable yet.
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::NoSession`] when `method` requires a session
    /// and none is established.
    pub(crate) fn gate(&self, method: Method) -> Result<(), FacadeError> {
        if !method.requires_session() {
            return Ok(());
        }
        if self.identity.is_logging_in() || self.identity.principal().is_none() {
            return Err(FacadeError::NoSession);
        }
        Ok(())
    }

    /// Cached-read path: serve a fresh entry if present, otherwise fetch and
    /// store under `key`. Results fetched before a session clear are
    /// discarded rather than stored. Reads are never retried.
    pub(crate) async fn cached<T, F, Fut>(
        &self,
        method: Method,
        key: CacheKey,
        fetch: F,
    ) -> Result<T, FacadeError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.gate(method)?;
        if let Some(value) = self.cache.get_fresh::<T>(&key) {
            tracing::debug!(key = %key, "serving cached read");
            return Ok(value);
        }
        let generation = self.cache.generation();
        let value = fetch().await?;
        self.cache.put_if_current(key, value.clone(), generation);
        Ok(value)
    }
}

#[cfg(test)]
#[path = "facade_test.rs"]
mod tests;
