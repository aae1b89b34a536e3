//! # Backend Lifecycle
//!
//! Spawning, wiring and shutting down the actors of the in-process store backend.
//!
//! Actors are created without their dependencies and receive them at `run(context)`
//! time. The product actor holds clients of four other actors, and the inventory
//! level actor holds two:
//!
//! ```rust,ignore
//! impl ActorEntity for Product {
//!     type Context = ProductContext; // categories, channels, profiles, inventory items
//! }
//!
//! impl ActorEntity for InventoryLevel {
//!     type Context = LevelContext; // inventory items, stock locations
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Dependents release their context** - which closes the channels they held
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Tracing is set up by [`setup_tracing`], re-exported from `resource_actor`.

pub mod backend;

pub use backend::*;
pub use resource_actor::tracing::setup_tracing;
