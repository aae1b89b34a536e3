//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every backend resource (category,
//! product, inventory item, ...) implements to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). It specifies associated types for IDs,
//! DTOs, list filters, context and errors, and provides lifecycle hooks
//! (`validate`, `on_create`, `on_update`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::matches`] - every entity matches every filter unless overridden
//! - [`ActorEntity::unique_keys`] - no uniqueness constraints unless overridden
//! - [`ActorEntity::validate`] / [`ActorEntity::on_create`] - no-ops by default
//!
//! Resources that never change after creation use [`std::convert::Infallible`] as
//! their `Update` type and implement `on_update` with an empty `match`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can call other actors. The `Context`
/// type is injected into every hook at `run()` time ("late binding" of
/// dependencies), which lets a product reach the inventory-item actor without the
/// two actors knowing each other at construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so
    /// listings come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Criteria accepted by `list`. `Default` must select everything.
    type Filter: Send + Sync + Debug + Default;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identity assigned by the actor at creation.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously, before any hook, and is the place for
    /// payload-only validation.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by `filter` in a `list` request.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    /// Keys that must be unique across all stored entities of this type.
    fn unique_keys(&self) -> Vec<String> {
        Vec::new()
    }

    // --- Lifecycle Hooks (Async) ---

    /// Checks references against other actors. Runs for every member of a batch
    /// before any `on_create` hook, and must not have side effects.
    async fn validate(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once the whole batch has validated, just before insertion.
    /// Use this hook for side effects on other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
