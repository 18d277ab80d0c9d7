//! External checkout-session pair (Stripe-like provider).
//!
//! Payment processing itself lives entirely with the external provider; the
//! backend only brokers session creation and status polling.

use serde::Deserialize;
use serde_json::json;

use crate::client::{BackendClient, Method};
use crate::error::ApiError;
use crate::types::{CheckoutSession, CheckoutStatus};
use crate::ApiResponse;

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutSessionResponse {
    pub session: CheckoutSession,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutStatusResponse {
    pub checkout: CheckoutStatus,
}

impl BackendClient {
    /// Opens a checkout session with the external payment provider for
    /// `amount` and returns the redirect URL.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the backend rejects the request.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn create_checkout_session(&self, amount: i64) -> Result<CheckoutSession, ApiError> {
        let args = json!({ "amount": amount });
        let envelope: ApiResponse<CheckoutSessionResponse> =
            self.call(Method::CreateCheckoutSession, &args).await?;
        Ok(envelope.data.session)
    }

    /// Polls the status of a previously opened checkout session. This is the
    /// one operation the backend accepts without an established session — see
    /// [`Method::requires_session`].
    ///
    /// # Errors
    ///
    /// Same surface as [`BackendClient::create_checkout_session`].
    pub async fn get_checkout_status(&self, session_id: &str) -> Result<CheckoutStatus, ApiError> {
        let args = json!({ "sessionId": session_id });
        let envelope: ApiResponse<CheckoutStatusResponse> =
            self.call(Method::GetCheckoutStatus, &args).await?;
        Ok(envelope.data.checkout)
    }
}
