//! Contract error types for the site content module
//!
//! These errors are transport-agnostic; the REST and HTML surfaces map them
//! to their own responses.

use thiserror::Error;

/// Site content domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// Item or document not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (item, home)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Invalid input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Schema.org JSON-LD input is not a JSON object
    #[error("Invalid JSON in Schema field: {message}")]
    InvalidJsonLd { message: String },

    /// Missing or invalid admin session
    #[error("Unauthorized")]
    Unauthorized,

    /// Document store failure
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl SiteError {
    pub(crate) fn item_not_found(collection: impl std::fmt::Display, id: &str) -> Self {
        Self::NotFound {
            resource: "item".to_string(),
            id: format!("{}/{}", collection, id),
        }
    }

    pub(crate) fn storage(error: anyhow::Error) -> Self {
        tracing::error!("Document store failure: {:#}", error);
        Self::Storage {
            message: error.to_string(),
        }
    }
}
