use thiserror::Error;

use collabr_api::ApiError;
use collabr_core::IdentityError;

/// Errors surfaced by the data-access façade.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// An accessor was invoked before a session-bearing client exists.
    /// Generated locally; nothing reaches the remote side.
    #[error("no authenticated session; sign in before calling the backend")]
    NoSession,

    /// A remote-call failure, propagated unchanged from the backend client.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A failure from the external identity provider (login rejection).
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
