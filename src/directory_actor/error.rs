//! Error types for the store directory actors.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur for stores, sales channels, shipping profiles and stock locations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A required name (or profile type) is blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DirectoryError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DirectoryError::NotFound(id),
            FrameworkError::Conflict(key) => DirectoryError::AlreadyExists(key),
            FrameworkError::EntityError(inner) => match inner.downcast::<DirectoryError>() {
                Ok(e) => *e,
                Err(other) => DirectoryError::ActorCommunicationError(other.to_string()),
            },
            other => DirectoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for DirectoryError {
    fn from(msg: String) -> Self {
        DirectoryError::ActorCommunicationError(msg)
    }
}
