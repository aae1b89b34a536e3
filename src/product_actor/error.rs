//! Error types for the Product actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product payload is malformed (empty title, bad option matrix, bad price, ...).
    #[error("Invalid product {handle:?}: {reason}")]
    InvalidProduct { handle: String, reason: String },

    /// A referenced category, sales channel or shipping profile does not exist.
    #[error("Product {handle:?} references missing {kind} {id}")]
    MissingReference {
        handle: String,
        kind: &'static str,
        id: String,
    },

    /// The handle or one of the SKUs is already taken.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// Creating the inventory items behind the variants failed.
    #[error("Inventory error: {0}")]
    InventoryError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub(crate) fn invalid(handle: &str, reason: impl Into<String>) -> Self {
        ProductError::InvalidProduct {
            handle: handle.to_string(),
            reason: reason.into(),
        }
    }

    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Conflict(key) => ProductError::AlreadyExists(key),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(e) => *e,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
