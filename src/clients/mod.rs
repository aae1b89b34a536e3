//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client maps [`FrameworkError`](resource_actor::FrameworkError) into its
//! resource's error enum and gets `get`/`list` from [`ActorClient`].

pub mod category_client;
pub mod directory_client;
pub mod inventory_client;
pub mod product_client;

pub use category_client::*;
pub use directory_client::*;
pub use inventory_client::*;
pub use product_client::*;
pub use resource_actor::ActorClient;
