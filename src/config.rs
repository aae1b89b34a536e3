//! Run configuration: defaults, then an optional `seed.{toml,json,yaml}` file, then
//! `SEED_*` environment variables (`SEED_STOCKED_QUANTITY=250`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Name the store is renamed to.
    pub store_name: String,
    /// Sales channel every product is published to.
    pub sales_channel_name: String,
    /// Type of the shipping profile products are attached to.
    pub shipping_profile_type: String,
    /// Quantity given to each new inventory level.
    pub stocked_quantity: u32,
    /// JSON catalog to load instead of the built-in dental catalog.
    pub catalog_path: Option<PathBuf>,
    /// Mailbox size of every backend actor.
    pub channel_buffer: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            store_name: "DentStore - Dental Supplies".to_string(),
            sales_channel_name: "Default Sales Channel".to_string(),
            shipping_profile_type: "default".to_string(),
            stocked_quantity: 500,
            catalog_path: None,
            channel_buffer: 32,
        }
    }
}

impl SeedConfig {
    /// Load configuration from the `seed` file in the working directory and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("seed")
    }

    /// Same as [`SeedConfig::load`] with an explicit file stem (extension optional).
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&SeedConfig::default())?)
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("SEED").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
