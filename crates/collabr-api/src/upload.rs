//! Blob upload with progress reporting.
//!
//! The upload body is streamed in configured-size chunks; an observer is
//! notified with monotonically non-decreasing percentages as chunks are
//! handed to the transport, and with the terminal value 100 once the backend
//! has acknowledged the upload. No guarantee is made about callback
//! frequency — only monotonicity and the terminal value.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{BackendClient, Method};
use crate::error::ApiError;
use crate::types::{ApiResponse, ExternalBlob};

/// Observer for upload progress. Percentages are non-decreasing; `100` is
/// emitted exactly once, after the backend acknowledges the upload.
pub trait UploadProgress: Send + Sync {
    fn on_progress(&self, percent: u8);
}

impl<F> UploadProgress for F
where
    F: Fn(u8) + Send + Sync,
{
    fn on_progress(&self, percent: u8) {
        self(percent);
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlobResponse {
    pub blob: ExternalBlob,
}

impl BackendClient {
    /// Uploads `bytes` as an opaque blob and returns the backend-issued
    /// reference.
    ///
    /// Progress below 100 is reported as chunks are handed to the transport
    /// and is capped at 99; the terminal 100 is only emitted after a
    /// successful acknowledgement, so an observer seeing 100 may rely on the
    /// blob existing remotely.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`ApiError::Api`] if the envelope reports an error.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn upload_blob(
        &self,
        bytes: Vec<u8>,
        observer: Arc<dyn UploadProgress>,
    ) -> Result<ExternalBlob, ApiError> {
        let method = Method::UploadBlob;
        let url = self.endpoint(method);

        let total = bytes.len();
        let chunk_bytes = self.upload_chunk_bytes.max(1);
        let chunks: Vec<Vec<u8>> = bytes.chunks(chunk_bytes).map(<[u8]>::to_vec).collect();

        // An empty upload yields no chunks, so the closure (and its division
        // by `total`) never runs; the observer then only sees the terminal 100.
        let stream_observer = Arc::clone(&observer);
        let mut sent = 0usize;
        let body_stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
            sent += chunk.len();
            // Capped at 99 in flight; 100 is reserved for acknowledged success.
            let percent = u8::try_from((sent * 100 / total).min(99)).unwrap_or(99);
            stream_observer.on_progress(percent);
            Ok::<Vec<u8>, std::convert::Infallible>(chunk)
        }));

        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(reqwest::Body::wrap_stream(body_stream));
        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                method: method.name(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
                context: method.name().to_owned(),
                source: e,
            })?;
        Self::check_api_error(&value)?;

        let envelope: ApiResponse<BlobResponse> =
            serde_json::from_value(value).map_err(|e| ApiError::Deserialize {
                context: method.name().to_owned(),
                source: e,
            })?;

        observer.on_progress(100);
        Ok(envelope.data.blob)
    }
}
