//! Cached reads, one per remote read operation.
//!
//! Each read is enabled only once a session is established; each caches
//! under its own deterministic key and is never retried — a failed read
//! surfaces immediately so authorization problems are not masked as
//! transient.

use std::sync::Arc;

use collabr_api::{
    BrandProfile, CheckoutStatus, CreatorProfile, DashboardStats, Method, UserProfile,
};

use crate::error::FacadeError;
use crate::facade::Facade;
use crate::filters::CreatorFilters;
use crate::keys::CacheKey;

impl Facade {
    /// The caller's account record, or `None` when the principal has not
    /// registered yet. Cached under `currentUserProfile`.
    ///
    /// # Errors
    ///
    /// [`FacadeError::NoSession`] before a session exists;
    /// [`FacadeError::Api`] on remote failure.
    pub async fn current_user_profile(&self) -> Result<Option<UserProfile>, FacadeError> {
        let client = Arc::clone(&self.client);
        self.cached(
            Method::GetCallerUserProfile,
            CacheKey::CurrentUserProfile,
            move || async move { client.get_caller_user_profile().await },
        )
        .await
    }

    /// The caller's brand profile. Cached under `brandProfile`.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::current_user_profile`].
    pub async fn brand_profile(&self) -> Result<BrandProfile, FacadeError> {
        let client = Arc::clone(&self.client);
        self.cached(Method::GetBrandProfile, CacheKey::BrandProfile, move || {
            async move { client.get_brand_profile().await }
        })
        .await
    }

    /// The caller's creator profile. Cached under `creatorProfile`.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::current_user_profile`].
    pub async fn creator_profile(&self) -> Result<CreatorProfile, FacadeError> {
        let client = Arc::clone(&self.client);
        self.cached(
            Method::GetCreatorProfile,
            CacheKey::CreatorProfile,
            move || async move { client.get_creator_profile().await },
        )
        .await
    }

    /// Creators matching `filters`, cached per distinct normalized filter
    /// set. Empty and malformed numeric fields are unconstrained, never zero.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::current_user_profile`].
    pub async fn browse_creators(
        &self,
        filters: &CreatorFilters,
    ) -> Result<Vec<CreatorProfile>, FacadeError> {
        let query = filters.normalize();
        let key = CacheKey::creators(&query);
        let client = Arc::clone(&self.client);
        self.cached(Method::BrowseCreators, key, move || async move {
            client.browse_creators(&query).await
        })
        .await
    }

    /// Brand campaign/spend aggregates. Cached under `brandDashboardStats`.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::current_user_profile`].
    pub async fn brand_dashboard_stats(&self) -> Result<DashboardStats, FacadeError> {
        let client = Arc::clone(&self.client);
        self.cached(
            Method::GetBrandDashboardStats,
            CacheKey::BrandDashboardStats,
            move || async move { client.get_brand_dashboard_stats().await },
        )
        .await
    }

    /// Creator campaign/earnings aggregates. Cached under
    /// `creatorDashboardStats`.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::current_user_profile`].
    pub async fn creator_dashboard_stats(&self) -> Result<DashboardStats, FacadeError> {
        let client = Arc::clone(&self.client);
        self.cached(
            Method::GetCreatorDashboardStats,
            CacheKey::CreatorDashboardStats,
            move || async move { client.get_creator_dashboard_stats().await },
        )
        .await
    }

    /// Status of an external checkout session. Deliberately uncached: the
    /// whole point of polling is to observe the provider-side transition.
    /// This is also the one read the backend accepts without a session.
    ///
    /// # Errors
    ///
    /// [`FacadeError::Api`] on remote failure.
    pub async fn checkout_status(&self, session_id: &str) -> Result<CheckoutStatus, FacadeError> {
        self.gate(Method::GetCheckoutStatus)?;
        Ok(self.client.get_checkout_status(session_id).await?)
    }
}
