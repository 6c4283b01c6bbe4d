//! Error types for folio-core

use thiserror::Error;

use crate::auth::AuthError;
use crate::remote::RemoteError;
use crate::share::ShareError;

/// Result type alias using folio-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Remote document store error
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Share link error
    #[error(transparent)]
    Share(#[from] ShareError),

    /// Navigation refused
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Shared portfolios are opened read-only and cannot be saved.
    #[error("Shared portfolios are read-only")]
    ReadOnly,

    /// The session ended before the save could start.
    #[error("Session ended before the portfolio was saved")]
    SessionEnded,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of a navigation request
pub type NavigationResult<T> = std::result::Result<T, NavigationError>;

/// Reasons a requested view change did not happen
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// The target needs a signed-in account; the auth prompt was opened.
    #[error("Sign in to continue")]
    AuthRequired,

    /// The state machine has no edge from the current view to the target.
    #[error("Cannot navigate from {from} to {to}")]
    InvalidTransition {
        from: crate::controller::View,
        to: crate::controller::View,
    },
}
