//! # Framework Errors
//!
//! Common error types shared by every resource actor and client. Entity-specific
//! failures travel inside [`FrameworkError::EntityError`] so that typed clients can
//! unwrap them into their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A unique key (handle, SKU, item/location pair, ...) is already taken,
    /// either by a stored entity or by an earlier payload of the same batch.
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    pub(crate) fn entity<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }
}
