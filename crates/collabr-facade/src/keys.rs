//! Deterministic cache keys for the façade's reads.
//!
//! A key identifies one cached read including its distinguishing parameters;
//! two reads with the same key are interchangeable. Parameterless reads map
//! to fixed strings; creator browsing folds its normalized filter set into
//! the key so each distinct filter combination caches independently.

use collabr_api::CreatorQuery;

/// Identity of a cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    CurrentUserProfile,
    BrandProfile,
    CreatorProfile,
    /// Creator browsing, keyed by the normalized filter fingerprint.
    Creators(String),
    BrandDashboardStats,
    CreatorDashboardStats,
}

impl CacheKey {
    /// Key for a creator-browsing read with the given normalized filters.
    #[must_use]
    pub fn creators(query: &CreatorQuery) -> Self {
        CacheKey::Creators(fingerprint(query))
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::CurrentUserProfile => f.write_str("currentUserProfile"),
            CacheKey::BrandProfile => f.write_str("brandProfile"),
            CacheKey::CreatorProfile => f.write_str("creatorProfile"),
            CacheKey::Creators(fp) => write!(f, "creators:{fp}"),
            CacheKey::BrandDashboardStats => f.write_str("brandDashboardStats"),
            CacheKey::CreatorDashboardStats => f.write_str("creatorDashboardStats"),
        }
    }
}

/// Renders a normalized query as a deterministic fingerprint.
///
/// Fields are emitted in a fixed order and unset dimensions are skipped, so
/// equal queries always produce equal fingerprints. A fully unconstrained
/// query renders as `all`.
fn fingerprint(query: &CreatorQuery) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(platform) = &query.platform {
        parts.push(format!("platform={platform}"));
    }
    if let Some(min) = query.min_followers {
        parts.push(format!("minFollowers={min}"));
    }
    if let Some(max) = query.max_followers {
        parts.push(format!("maxFollowers={max}"));
    }
    if let Some(min) = query.min_price {
        parts.push(format!("minPrice={min}"));
    }
    if let Some(max) = query.max_price {
        parts.push(format!("maxPrice={max}"));
    }
    if let Some(category) = &query.category {
        parts.push(format!("category={category}"));
    }
    if parts.is_empty() {
        "all".to_owned()
    } else {
        parts.join("&")
    }
}
