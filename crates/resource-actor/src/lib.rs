//! # Resource Actor
//!
//! This crate provides the building blocks for an in-process store backend made of
//! **resource actors**: one Tokio task per resource type (categories, products,
//! inventory items, ...), each owning its entities and answering a small,
//! uniform set of requests.
//!
//! ## Why actors for a backend?
//!
//! - **Isolated state**: each resource type lives in exactly one task, so there is no
//!   shared memory and no locks.
//! - **Atomic batches for free**: a batch is processed as one message, so no other
//!   request can observe (or interleave with) a half-applied batch.
//! - **Coordination through clients**: when one resource creates or checks another
//!   (a product creating its inventory items, a level checking its location), it does
//!   so through the other actor's client, injected as context.
//!
//! ## Core Concepts
//!
//! - [`ActorEntity`]: the trait a resource implements (payload construction, list
//!   filtering, unique keys, validation and creation hooks).
//! - [`ResourceActor`]: the generic server loop with `Create`, `CreateMany`, `Get`,
//!   `List` and `Update`.
//! - [`ResourceClient`]: the cloneable async handle used to talk to an actor.
//! - [`ActorClient`]: a trait that typed clients implement to inherit `get`/`list`
//!   and map [`FrameworkError`] into their own error enums.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction
//! time:
//!
//! ```rust,ignore
//! let (item_actor, item_client) = ResourceActor::<InventoryItem>::new(32);
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//!
//! tokio::spawn(item_actor.run(()));
//! // Products create one inventory item per variant through this client.
//! tokio::spawn(product_actor.run(ProductContext { inventory_items: item_client, .. }));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! See the [`mock`] module for [`mock::MockClient`] and the receiver helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
