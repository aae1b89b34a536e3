//! Error types shared by the inventory item and inventory level actors.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested item or level was not found.
    #[error("Inventory record not found: {0}")]
    NotFound(String),

    /// An inventory item was submitted without a SKU.
    #[error("Inventory item has an empty SKU")]
    EmptySku,

    /// A level refers to an item or location that does not exist.
    #[error("Inventory level references missing {kind} {id}")]
    MissingReference { kind: &'static str, id: String },

    /// The SKU or the (item, location) pair is already taken.
    #[error("Inventory record already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl InventoryError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            FrameworkError::Conflict(key) => InventoryError::AlreadyExists(key),
            FrameworkError::EntityError(inner) => match inner.downcast::<InventoryError>() {
                Ok(e) => *e,
                Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
            },
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
