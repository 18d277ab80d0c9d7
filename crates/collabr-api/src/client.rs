//! HTTP client for the marketplace backend.
//!
//! Wraps `reqwest` with backend-specific error handling, session-token
//! attachment, and typed response deserialization. Every operation POSTs a
//! JSON body to `{base}/api/{method}` and checks the `"status"` field in the
//! JSON envelope, surfacing backend-level errors as [`ApiError::Api`].
//!
//! Operation methods live in sibling modules (`profiles`, `collabs`,
//! `checkout`, `upload`) as `impl BackendClient` blocks.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use collabr_core::AppConfig;

use crate::error::ApiError;

/// Every remote operation, tagged with whether it may be dispatched without
/// an established session. The data-access layer consults
/// [`Method::requires_session`] before any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GetCallerUserProfile,
    GetBrandProfile,
    GetCreatorProfile,
    BrowseCreators,
    GetBrandDashboardStats,
    GetCreatorDashboardStats,
    RegisterBrand,
    RegisterCreator,
    UpdateCreatorProfile,
    CreateCollaborationRequest,
    UpdateCollaborationStatus,
    CreatePaymentTransaction,
    UpdatePaymentStatus,
    CreateCheckoutSession,
    GetCheckoutStatus,
    UploadBlob,
}

impl Method {
    /// Wire name of the operation, as it appears in the request path.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::GetCallerUserProfile => "getCallerUserProfile",
            Method::GetBrandProfile => "getBrandProfile",
            Method::GetCreatorProfile => "getCreatorProfile",
            Method::BrowseCreators => "browseCreators",
            Method::GetBrandDashboardStats => "getBrandDashboardStats",
            Method::GetCreatorDashboardStats => "getCreatorDashboardStats",
            Method::RegisterBrand => "registerBrand",
            Method::RegisterCreator => "registerCreator",
            Method::UpdateCreatorProfile => "updateCreatorProfile",
            Method::CreateCollaborationRequest => "createCollaborationRequest",
            Method::UpdateCollaborationStatus => "updateCollaborationStatus",
            Method::CreatePaymentTransaction => "createPaymentTransaction",
            Method::UpdatePaymentStatus => "updatePaymentStatus",
            Method::CreateCheckoutSession => "createCheckoutSession",
            Method::GetCheckoutStatus => "getCheckoutStatus",
            Method::UploadBlob => "uploadBlob",
        }
    }

    /// `false` only for operations the backend accepts without a session.
    /// Checkout status is polled from the payment provider's redirect landing
    /// page, which may render before the session is re-established.
    #[must_use]
    pub fn requires_session(self) -> bool {
        !matches!(self, Method::GetCheckoutStatus)
    }
}

/// Client for the marketplace backend.
///
/// Manages the HTTP client, base URL, session token, and upload chunking.
/// Use [`BackendClient::new`] for production or
/// [`BackendClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug)]
pub struct BackendClient {
    pub(crate) client: Client,
    base_url: Url,
    pub(crate) session_token: Option<String>,
    pub(crate) upload_chunk_bytes: usize,
}

impl BackendClient {
    /// Creates a client from injected configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::Api`] if the configured backend URL is
    /// not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let mut client = Self::build(
            &config.backend_url,
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )?;
        client.upload_chunk_bytes = config.upload_chunk_bytes.max(1);
        Ok(client)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::Api`] if `base_url` is not a valid URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, 30, 10, "collabr/0.1 (marketplace-client)")
    }

    fn build(
        base_url: &str,
        request_timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends to the path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised)
            .map_err(|e| ApiError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        // Only http(s) bases can have endpoint paths joined onto them;
        // anything else (mailto:, data:) would break endpoint construction.
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Api(format!(
                "invalid base URL '{base_url}': expected an http(s) URL"
            )));
        }
        let base_url = parsed;

        Ok(Self {
            client,
            base_url,
            session_token: None,
            upload_chunk_bytes: 65536,
        })
    }

    /// Attaches the bearer token of an established session. All subsequent
    /// calls carry it as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Builds the full endpoint URL for an operation.
    pub(crate) fn endpoint(&self, method: Method) -> Url {
        // `build()` only accepts http(s) bases, so path segments are always
        // available here.
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("api").push(method.name());
        }
        url
    }

    /// Dispatches one operation: POSTs `args` as JSON, asserts a 2xx HTTP
    /// status, checks the envelope `"status"` field, and deserializes the
    /// payload.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`ApiError::Api`] if the envelope reports an error.
    /// - [`ApiError::Deserialize`] if the payload does not match `T`.
    pub(crate) async fn call<A, T>(&self, method: Method, args: &A) -> Result<T, ApiError>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(method);
        tracing::debug!(method = method.name(), "dispatching backend call");
        let mut request = self.client.post(url).json(args);
        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Non-JSON bodies on failure statuses (proxy error pages and the
        // like) are reported as the status, not as a parse failure.
        let value: serde_json::Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                if !status.is_success() {
                    return Err(ApiError::UnexpectedStatus {
                        status: status.as_u16(),
                        method: method.name(),
                    });
                }
                return Err(ApiError::Deserialize {
                    context: method.name().to_owned(),
                    source: e,
                });
            }
        };
        Self::check_api_error(&value)?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                method: method.name(),
            });
        }

        serde_json::from_value(value).map_err(|e| ApiError::Deserialize {
            context: method.name().to_owned(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    pub(crate) fn check_api_error(body: &serde_json::Value) -> Result<(), ApiError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("error") {
            let msg = body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(ApiError::Api(msg));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
