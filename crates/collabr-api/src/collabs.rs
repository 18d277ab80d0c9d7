//! Collaboration-request and payment-transaction operations.

use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use collabr_core::Principal;

use crate::client::{BackendClient, Method};
use crate::error::ApiError;
use crate::types::{CollabStatus, CollaborationRequest, PaymentStatus, PaymentTransaction};
use crate::ApiResponse;

#[derive(Debug, Deserialize)]
pub(crate) struct CollabResponse {
    pub request: CollaborationRequest,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentResponse {
    pub transaction: PaymentTransaction,
}

impl BackendClient {
    /// Creates a collaboration request from the calling brand to `creator`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the backend rejects the request.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn create_collaboration_request(
        &self,
        creator: &Principal,
        campaign_details: &str,
    ) -> Result<CollaborationRequest, ApiError> {
        let args = json!({ "creatorId": creator, "campaignDetails": campaign_details });
        let envelope: ApiResponse<CollabResponse> =
            self.call(Method::CreateCollaborationRequest, &args).await?;
        Ok(envelope.data.request)
    }

    /// Requests a status transition on an existing collaboration request.
    /// Transition rules are enforced server-side; an illegal transition comes
    /// back as [`ApiError::Api`].
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::create_collaboration_request`].
    pub async fn update_collaboration_status(
        &self,
        id: Uuid,
        status: CollabStatus,
    ) -> Result<CollaborationRequest, ApiError> {
        let args = json!({ "id": id, "status": status });
        let envelope: ApiResponse<CollabResponse> =
            self.call(Method::UpdateCollaborationStatus, &args).await?;
        Ok(envelope.data.request)
    }

    /// Creates a payment transaction from the calling principal to `receiver`.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::create_collaboration_request`].
    pub async fn create_payment_transaction(
        &self,
        receiver: &Principal,
        amount: i64,
    ) -> Result<PaymentTransaction, ApiError> {
        let args = json!({ "receiver": receiver, "amount": amount });
        let envelope: ApiResponse<PaymentResponse> =
            self.call(Method::CreatePaymentTransaction, &args).await?;
        Ok(envelope.data.transaction)
    }

    /// Updates the status of an existing payment transaction.
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::create_collaboration_request`].
    pub async fn update_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<PaymentTransaction, ApiError> {
        let args = json!({ "id": id, "status": status });
        let envelope: ApiResponse<PaymentResponse> =
            self.call(Method::UpdatePaymentStatus, &args).await?;
        Ok(envelope.data.transaction)
    }
}
