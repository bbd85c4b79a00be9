//! Error taxonomy for backend calls.

use thiserror::Error;

/// Failure modes of a backend call.
///
/// `Upstream` carries the backend's own status and message so callers can
/// hand them to the browser unchanged; everything reqwest-shaped is a
/// transport failure the edge turns into a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call needs a session token and none was supplied.
    #[error("no session token")]
    MissingToken,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The request never completed, or the reply was not JSON.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
