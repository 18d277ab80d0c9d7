//! Profile, browsing, and dashboard-statistics operations.

use serde::Deserialize;
use serde_json::json;

use crate::client::{BackendClient, Method};
use crate::error::ApiError;
use crate::types::{
    ApiResponse, BrandProfile, CreatorProfile, CreatorProfileUpdate, CreatorQuery, DashboardStats,
    NewCreatorProfile, UserProfile,
};

/// Wrapper for profile responses: `{ "profile": { ... } | null }`.
#[derive(Debug, Deserialize)]
pub(crate) struct CallerProfileResponse {
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BrandProfileResponse {
    pub profile: BrandProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatorProfileResponse {
    pub profile: CreatorProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatorsResponse {
    pub creators: Vec<CreatorProfile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsResponse {
    pub stats: DashboardStats,
}

impl BackendClient {
    /// Fetches the caller's account record, or `None` when the principal has
    /// not registered yet.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the backend reports an error.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        let envelope: ApiResponse<CallerProfileResponse> =
            self.call(Method::GetCallerUserProfile, &json!({})).await?;
        Ok(envelope.data.profile)
    }

    /// Fetches the caller's brand profile.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the backend reports an error (including "not a
    ///   brand").
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn get_brand_profile(&self) -> Result<BrandProfile, ApiError> {
        let envelope: ApiResponse<BrandProfileResponse> =
            self.call(Method::GetBrandProfile, &json!({})).await?;
        Ok(envelope.data.profile)
    }

    /// Fetches the caller's creator profile.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::get_brand_profile`].
    pub async fn get_creator_profile(&self) -> Result<CreatorProfile, ApiError> {
        let envelope: ApiResponse<CreatorProfileResponse> =
            self.call(Method::GetCreatorProfile, &json!({})).await?;
        Ok(envelope.data.profile)
    }

    /// Lists creators matching `query`. Unset filter dimensions are sent as
    /// `null` and leave that dimension unconstrained.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the backend reports an error.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn browse_creators(
        &self,
        query: &CreatorQuery,
    ) -> Result<Vec<CreatorProfile>, ApiError> {
        let envelope: ApiResponse<CreatorsResponse> =
            self.call(Method::BrowseCreators, query).await?;
        Ok(envelope.data.creators)
    }

    /// Fetches campaign/spend aggregates for the calling brand.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::get_brand_profile`].
    pub async fn get_brand_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let envelope: ApiResponse<StatsResponse> =
            self.call(Method::GetBrandDashboardStats, &json!({})).await?;
        Ok(envelope.data.stats)
    }

    /// Fetches campaign/earnings aggregates for the calling creator.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::get_brand_profile`].
    pub async fn get_creator_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let envelope: ApiResponse<StatsResponse> = self
            .call(Method::GetCreatorDashboardStats, &json!({}))
            .await?;
        Ok(envelope.data.stats)
    }

    /// Registers the calling principal as a brand.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the backend rejects the registration (already
    ///   registered, validation failure).
    /// - [`ApiError::Http`] on network failure.
    pub async fn register_brand(
        &self,
        name: &str,
        email: &str,
        industry: &str,
    ) -> Result<(), ApiError> {
        let args = json!({ "name": name, "email": email, "industry": industry });
        let _: ApiResponse<serde_json::Value> = self.call(Method::RegisterBrand, &args).await?;
        Ok(())
    }

    /// Registers the calling principal as a creator and returns the created
    /// profile.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::register_brand`], plus
    /// [`ApiError::Deserialize`] if the created profile does not parse.
    pub async fn register_creator(
        &self,
        profile: &NewCreatorProfile,
    ) -> Result<CreatorProfile, ApiError> {
        let envelope: ApiResponse<CreatorProfileResponse> =
            self.call(Method::RegisterCreator, profile).await?;
        Ok(envelope.data.profile)
    }

    /// Replaces the caller's creator profile and returns the stored record.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::register_creator`].
    pub async fn update_creator_profile(
        &self,
        update: &CreatorProfileUpdate,
    ) -> Result<CreatorProfile, ApiError> {
        let envelope: ApiResponse<CreatorProfileResponse> =
            self.call(Method::UpdateCreatorProfile, update).await?;
        Ok(envelope.data.profile)
    }
}
