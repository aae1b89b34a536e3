//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`. Without `RUST_LOG` it falls back to `info`.
//!
//! Every actor logs with an `entity_type` field, so one run's log reads like a
//! timeline of backend writes:
//!
//! ```text
//! INFO Actor started entity_type="Category"
//! INFO Created batch entity_type="Category" count=6 size=6
//! INFO Created batch entity_type="InventoryItem" count=2 size=2
//! INFO Created batch entity_type="Product" count=3 size=3
//! INFO Created batch entity_type="InventoryLevel" count=6 size=6
//! ```
//!
//! With `RUST_LOG=debug` the request payloads (`?params`, `?filter`) are logged as
//! structured fields as well.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=resource_actor=debug,catalog_seed=info cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - actors log entity_type instead
        .compact()
        .try_init();
}
