//! Error types for the card editor

use crate::cards::CardId;
use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing cards or looking up a profile.
///
/// None of these are fatal to an editing session: each one degrades a single
/// card or panel and the caller carries on. An unknown card tag is not an
/// error at all; it renders as [`Rendered::Unsupported`](crate::cards::Rendered).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An update targeted a card id that is not in the collection
    #[error("Card {0} not found")]
    NotFound(CardId),

    /// A customization commit was attempted with no card selected
    #[error("No card is selected for customization")]
    NoActiveSelection,

    /// Profile lookup failed (network, HTTP status or payload)
    #[error("Profile lookup failed: {0}")]
    Failure(String),

    /// A username that fails the presence check
    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    /// Reading or writing the persisted username failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
