//! Transfer shapes for the marketplace backend interface.
//!
//! Every entity here is remote state; this crate only models the wire shapes.
//! The backend speaks camelCase JSON and wraps every response in a
//! `{"status": "ok", ...}` envelope; [`ApiResponse`] captures that pattern
//! generically. Optional wire fields carry `#[serde(default)]` so older
//! records without them still deserialize.

use chrono::{DateTime, Utc};
use collabr_core::Principal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Top-level envelope for all backend responses.
///
/// The `status` field is `"ok"` on success or `"error"` on failure (with a
/// sibling `message`). The remaining fields are flattened from the payload.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Role assigned at registration; immutable thereafter (no role-change
/// operation exists on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Brand,
    Creator,
}

/// The authenticated caller's account record. At most one per principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub name: String,
    pub email: String,
    pub industry: String,
    pub created_at: DateTime<Utc>,
}

/// Optional per-platform handles plus an ordered list of free-form links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

/// A creator's public listing. `id` equals the owning principal; updates
/// replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    pub id: Principal,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub category: String,
    pub social_media_links: SocialMediaLinks,
    pub instagram_followers: i64,
    pub youtube_subscribers: i64,
    #[serde(default)]
    pub tiktok_followers: Option<i64>,
    pub pricing_post: i64,
    pub pricing_reel: i64,
    pub pricing_video: i64,
    #[serde(default)]
    pub profile_picture: Option<ExternalBlob>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `registerCreator`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreatorProfile {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub category: String,
    pub social_media_links: SocialMediaLinks,
    pub instagram_followers: i64,
    pub youtube_subscribers: i64,
    pub tiktok_followers: Option<i64>,
    pub pricing_reel: i64,
    pub pricing_post: i64,
    pub pricing_video: i64,
    pub profile_picture: Option<ExternalBlob>,
}

/// Payload for `updateCreatorProfile`. Whole-record replace; the email and
/// principal are fixed at registration and not part of the update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfileUpdate {
    pub full_name: String,
    pub phone_number: String,
    pub category: String,
    pub social_media_links: SocialMediaLinks,
    pub instagram_followers: i64,
    pub youtube_subscribers: i64,
    pub tiktok_followers: Option<i64>,
    pub pricing_reel: i64,
    pub pricing_post: i64,
    pub pricing_video: i64,
    pub profile_picture: Option<ExternalBlob>,
}

// ---------------------------------------------------------------------------
// Creator browsing
// ---------------------------------------------------------------------------

/// Filter parameters for `browseCreators`. Every dimension is optional; an
/// unset field is serialized as `null` and means "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorQuery {
    pub platform: Option<String>,
    pub min_followers: Option<i64>,
    pub max_followers: Option<i64>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Collaboration requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollabStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

/// A brand-initiated collaboration request. Status transitions are enforced
/// server-side; the client only requests them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationRequest {
    pub id: Uuid,
    pub brand: Principal,
    pub creator: Principal,
    pub campaign_details: String,
    pub status: CollabStatus,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    pub id: Uuid,
    pub sender: Principal,
    pub receiver: Principal,
    pub amount: i64,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Dashboard statistics
// ---------------------------------------------------------------------------

/// Aggregates derived remotely; read-only on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_campaigns: i64,
    pub active: i64,
    pub completed_campaigns: i64,
    pub total_spend: i64,
    pub pending: i64,
}

// ---------------------------------------------------------------------------
// External checkout (Stripe-like)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub session_id: String,
    /// Redirect URL hosted by the external payment provider.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStatus {
    Open,
    Complete,
    Expired,
}

// ---------------------------------------------------------------------------
// Blobs
// ---------------------------------------------------------------------------

/// Opaque reference to an uploaded asset.
///
/// `Reference` values are issued by the backend after a byte upload
/// ([`crate::BackendClient::upload_blob`]); `Url` values point at an asset
/// hosted elsewhere. The URL path is accepted after a parse check only — no
/// content validation is performed, since only the bytes path is exercised
/// by the product flows today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ExternalBlob {
    Reference(String),
    Url(String),
}

impl ExternalBlob {
    /// Wraps a URL-hosted asset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `url` does not parse as a URL.
    pub fn from_url(url: &str) -> Result<Self, ApiError> {
        reqwest::Url::parse(url).map_err(|e| ApiError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self::Url(url.to_owned()))
    }
}
