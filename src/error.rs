//! Error types shared across the crate.

use thiserror::Error;

/// Result type for estimation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or running an estimator.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument outside the domain the operation is defined on,
    /// such as a zero sample count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operating system's entropy source could not seed a generator.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
