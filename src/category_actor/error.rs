//! Error types for the Category actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// The category name is empty or has no characters usable in a handle.
    #[error("Invalid category name: {0:?}")]
    InvalidName(String),

    /// A category with the same handle already exists.
    #[error("Category already exists: {0}")]
    AlreadyExists(String),

    /// The backend rejected the request for a reason not covered above.
    #[error("Category rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CategoryError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            FrameworkError::Conflict(key) => CategoryError::AlreadyExists(key),
            FrameworkError::EntityError(inner) => match inner.downcast::<CategoryError>() {
                Ok(e) => *e,
                Err(other) => CategoryError::Rejected(other.to_string()),
            },
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::ActorCommunicationError(msg)
    }
}
