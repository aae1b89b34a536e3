//! # Catalog Seed
//!
//! > **Seeds a product catalog into a store backend and stocks it, idempotently.**
//!
//! A seed run resolves the store it writes to, loads categories and products
//! (with option axes, variants and prices), and then creates one stock level per
//! inventory item at the warehouse, skipping the items that already have one.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Run ([`seed`])
//! - **Role**: Target resolution, catalog loading and inventory reconciliation.
//! - **Key items**: [`Seeder`](seed::Seeder), [`CatalogLoader`](seed::CatalogLoader),
//!   [`InventoryReconciler`](seed::InventoryReconciler).
//!
//! ### 2. The Backend ([`lifecycle`])
//! An in-process stand-in for the store's services, built from resource actors.
//! - **Role**: Spawns one `ResourceActor` per resource type and wires their contexts.
//! - **Key items**: [`StoreBackend`](lifecycle::StoreBackend).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Typed wrappers around `ResourceClient` mapping framework errors into
//!   per-resource error enums.
//!
//! ### 4. The Resources ([`category_actor`], [`product_actor`], [`inventory_actor`], [`directory_actor`])
//! - **Role**: `ActorEntity` implementations holding the backend's validation rules:
//!   option/variant consistency, SKU and handle uniqueness, reference checks, one
//!   stock level per (item, location).
//!
//! ## ⚙️ Configuration
//!
//! [`SeedConfig`](config::SeedConfig) layers defaults, an optional `seed` file and
//! `SEED_*` environment variables. `.env` is read at startup.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod category_actor;
pub mod clients;
pub mod config;
pub mod directory_actor;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod seed;
