//! Data-access façade for the collabr marketplace client.
//!
//! Mediates between presentation code and the remote backend: cached reads
//! under deterministic keys, session gating before dispatch, mutations with
//! targeted invalidation, and a cache lifecycle bound to the session.

pub mod cache;
pub mod error;
pub mod facade;
pub mod filters;
pub mod keys;

mod mutations;
mod queries;

pub use cache::QueryCache;
pub use error::FacadeError;
pub use facade::Facade;
pub use filters::CreatorFilters;
pub use keys::CacheKey;
