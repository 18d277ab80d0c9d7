//! Mutations, one per state-changing remote operation.
//!
//! Mutations dispatch exactly once — no retry, no coalescing of concurrent
//! identical calls (at-most-one-in-flight, if wanted, is enforced by the
//! presentation layer disabling its trigger). On success each invalidates
//! exactly the cached reads whose underlying remote state it changed; on
//! failure the cache is left untouched.

use std::sync::Arc;

use uuid::Uuid;

use collabr_api::{
    CheckoutSession, CollabStatus, CollaborationRequest, CreatorProfile, CreatorProfileUpdate,
    ExternalBlob, Method, NewCreatorProfile, PaymentStatus, PaymentTransaction, UploadProgress,
};
use collabr_core::Principal;

use crate::error::FacadeError;
use crate::facade::Facade;
use crate::keys::CacheKey;

impl Facade {
    /// Registers the calling principal as a brand.
    ///
    /// On success the cached `currentUserProfile` is invalidated so the next
    /// read observes the new account record.
    ///
    /// # Errors
    ///
    /// [`FacadeError::NoSession`] before a session exists;
    /// [`FacadeError::Api`] on remote rejection.
    pub async fn register_brand(
        &self,
        name: &str,
        email: &str,
        industry: &str,
    ) -> Result<(), FacadeError> {
        self.gate(Method::RegisterBrand)?;
        self.client.register_brand(name, email, industry).await?;
        self.cache.invalidate(&CacheKey::CurrentUserProfile);
        Ok(())
    }

    /// Registers the calling principal as a creator and returns the created
    /// profile. Invalidates `currentUserProfile` on success.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn register_creator(
        &self,
        profile: &NewCreatorProfile,
    ) -> Result<CreatorProfile, FacadeError> {
        self.gate(Method::RegisterCreator)?;
        let created = self.client.register_creator(profile).await?;
        self.cache.invalidate(&CacheKey::CurrentUserProfile);
        Ok(created)
    }

    /// Replaces the caller's creator profile. Invalidates `creatorProfile`
    /// on success so the next read reflects the update instead of the
    /// pre-update snapshot.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn update_creator_profile(
        &self,
        update: &CreatorProfileUpdate,
    ) -> Result<CreatorProfile, FacadeError> {
        self.gate(Method::UpdateCreatorProfile)?;
        let stored = self.client.update_creator_profile(update).await?;
        self.cache.invalidate(&CacheKey::CreatorProfile);
        Ok(stored)
    }

    /// Sends a collaboration request to `creator`. Invalidates
    /// `brandDashboardStats` on success (campaign counts changed).
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn create_collaboration_request(
        &self,
        creator: &Principal,
        campaign_details: &str,
    ) -> Result<CollaborationRequest, FacadeError> {
        self.gate(Method::CreateCollaborationRequest)?;
        let request = self
            .client
            .create_collaboration_request(creator, campaign_details)
            .await?;
        self.cache.invalidate(&CacheKey::BrandDashboardStats);
        Ok(request)
    }

    /// Requests a status transition on a collaboration request. Both
    /// parties' dashboard aggregates depend on request status, so both stat
    /// keys are invalidated on success.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`]; illegal transitions come
    /// back as [`FacadeError::Api`].
    pub async fn update_collaboration_status(
        &self,
        id: Uuid,
        status: CollabStatus,
    ) -> Result<CollaborationRequest, FacadeError> {
        self.gate(Method::UpdateCollaborationStatus)?;
        let request = self.client.update_collaboration_status(id, status).await?;
        self.cache.invalidate(&CacheKey::BrandDashboardStats);
        self.cache.invalidate(&CacheKey::CreatorDashboardStats);
        Ok(request)
    }

    /// Creates a payment transaction to `receiver`. Spend and pending
    /// aggregates are payment-derived, so `brandDashboardStats` is
    /// invalidated on success.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn create_payment_transaction(
        &self,
        receiver: &Principal,
        amount: i64,
    ) -> Result<PaymentTransaction, FacadeError> {
        self.gate(Method::CreatePaymentTransaction)?;
        let transaction = self
            .client
            .create_payment_transaction(receiver, amount)
            .await?;
        self.cache.invalidate(&CacheKey::BrandDashboardStats);
        Ok(transaction)
    }

    /// Updates the status of a payment transaction. Invalidates
    /// `brandDashboardStats` on success.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn update_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<PaymentTransaction, FacadeError> {
        self.gate(Method::UpdatePaymentStatus)?;
        let transaction = self.client.update_payment_status(id, status).await?;
        self.cache.invalidate(&CacheKey::BrandDashboardStats);
        Ok(transaction)
    }

    /// Opens an external checkout session. No cached read depends on it, so
    /// nothing is invalidated.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn create_checkout_session(
        &self,
        amount: i64,
    ) -> Result<CheckoutSession, FacadeError> {
        self.gate(Method::CreateCheckoutSession)?;
        Ok(self.client.create_checkout_session(amount).await?)
    }

    /// Uploads a blob (e.g. a profile picture) and returns the backend
    /// reference. The profile itself is unchanged until the reference is
    /// submitted through a registration or update, so nothing is
    /// invalidated here.
    ///
    /// # Errors
    ///
    /// Same surface as [`Facade::register_brand`].
    pub async fn upload_blob(
        &self,
        bytes: Vec<u8>,
        observer: Arc<dyn UploadProgress>,
    ) -> Result<ExternalBlob, FacadeError> {
        self.gate(Method::UploadBlob)?;
        Ok(self.client.upload_blob(bytes, observer).await?)
    }
}
