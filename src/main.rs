//! # catalog-seed
//!
//! Seeds a catalog into a freshly bootstrapped in-process store backend and stocks
//! every inventory item at the warehouse.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! SEED_CATALOG_PATH=catalog.json SEED_STOCKED_QUANTITY=100 cargo run
//! ```

use catalog_seed::config::SeedConfig;
use catalog_seed::lifecycle::{setup_tracing, BackendDefaults, StoreBackend};
use catalog_seed::seed::{dental, CatalogDefinition, SeedError, Seeder, SeedSummary};
use std::process::ExitCode;
use tracing::{error, info};

async fn seed(backend: &StoreBackend, config: &SeedConfig) -> Result<SeedSummary, SeedError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog file");
            CatalogDefinition::from_json_file(path)?
        }
        None => {
            info!("Loading built-in dental catalog");
            dental::catalog()?
        }
    };

    backend.bootstrap(&BackendDefaults::default()).await?;

    let seeder = Seeder::new(backend.clients(), config);
    seeder.run(catalog).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = match SeedConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "Starting seed run");

    let backend = StoreBackend::new(config.channel_buffer);
    let result = seed(&backend, &config).await;

    let shutdown = backend.shutdown().await;

    match (result, shutdown) {
        (Ok(summary), Ok(())) => {
            info!(
                categories = summary.categories,
                products = summary.products,
                variants = summary.variants,
                inventory_levels = summary.inventory_levels,
                "Seed completed successfully"
            );
            ExitCode::SUCCESS
        }
        (Err(e), _) => {
            error!(error = %e, "Seed failed");
            ExitCode::FAILURE
        }
        (Ok(_), Err(e)) => {
            error!(error = %e, "Backend shutdown failed");
            ExitCode::FAILURE
        }
    }
}
