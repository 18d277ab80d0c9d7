pub mod client;
pub mod error;
pub mod types;
pub mod upload;

mod checkout;
mod collabs;
mod profiles;

pub use client::{BackendClient, Method};
pub use error::ApiError;
pub use types::{
    ApiResponse, BrandProfile, CheckoutSession, CheckoutStatus, CollabStatus,
    CollaborationRequest, CreatorProfile, CreatorProfileUpdate, CreatorQuery, DashboardStats,
    ExternalBlob, NewCreatorProfile, PaymentStatus, PaymentTransaction, Role, SocialMediaLinks,
    UserProfile,
};
pub use upload::UploadProgress;
