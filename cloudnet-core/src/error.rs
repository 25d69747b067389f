//! Error handling in [`cloudnet-core`][crate]
use thiserror::Error;

/// Convenient alias for the crate's error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible errors when building requests.
#[derive(Error, Debug)]
pub enum Error {
    /// A request failed basic validation before it was built.
    #[error("request validation failed: {0}")]
    Validation(String),

    /// Failed to assemble an [`http::Request`].
    #[error("HttpError: {0}")]
    HttpError(#[source] http::Error),
}
