//! # Seed Run
//!
//! A run has three phases, executed strictly in sequence:
//!
//! 1. **Target resolution** ([`Seeder::resolve_targets`]): find the store, sales
//!    channel, shipping profile and stock location the catalog is attached to, and
//!    rename the store.
//! 2. **Catalog load** ([`loader`]): categories, then products with their variants.
//! 3. **Inventory reconciliation** ([`reconciler`]): one stock level at the location
//!    for every inventory item that lacks one.
//!
//! Any error ends the run. Nothing already written is rolled back; running again
//! is safe for the reconciliation phase, while the catalog phase will report the
//! existing handles as conflicts.

pub mod catalog;
pub mod dental;
pub mod error;
pub mod loader;
pub mod reconciler;

pub use catalog::*;
pub use error::*;
pub use loader::{CatalogLoader, CategoryIndex, LoadReport};
pub use reconciler::{InventoryReconciler, ReconcileReport};

use crate::clients::{
    ActorClient, CategoryClient, InventoryItemClient, InventoryLevelClient, ProductClient,
    SalesChannelClient, ShippingProfileClient, StockLocationClient, StoreClient,
};
use crate::config::SeedConfig;
use crate::model::{
    SalesChannelFilter, SalesChannelId, ShippingProfileFilter, ShippingProfileId,
    StockLocationId, StoreId, StoreUpdate,
};
use tracing::{info, info_span, Instrument};

/// Every client a seed run talks to.
#[derive(Clone)]
pub struct SeedClients {
    pub stores: StoreClient,
    pub sales_channels: SalesChannelClient,
    pub shipping_profiles: ShippingProfileClient,
    pub stock_locations: StockLocationClient,
    pub categories: CategoryClient,
    pub products: ProductClient,
    pub inventory_items: InventoryItemClient,
    pub inventory_levels: InventoryLevelClient,
}

/// Where the catalog goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTargets {
    pub store_id: StoreId,
    pub sales_channel_id: SalesChannelId,
    pub shipping_profile_id: ShippingProfileId,
    pub location_id: StockLocationId,
}

/// Counts created by a complete run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub variants: usize,
    pub inventory_levels: usize,
}

pub struct Seeder {
    stores: StoreClient,
    sales_channels: SalesChannelClient,
    shipping_profiles: ShippingProfileClient,
    stock_locations: StockLocationClient,
    loader: CatalogLoader,
    reconciler: InventoryReconciler,
    store_name: String,
    sales_channel_name: String,
    shipping_profile_type: String,
}

impl Seeder {
    pub fn new(clients: SeedClients, config: &SeedConfig) -> Self {
        Self {
            stores: clients.stores,
            sales_channels: clients.sales_channels,
            shipping_profiles: clients.shipping_profiles,
            stock_locations: clients.stock_locations,
            loader: CatalogLoader::new(clients.categories, clients.products),
            reconciler: InventoryReconciler::new(
                clients.inventory_items,
                clients.inventory_levels,
                config.stocked_quantity,
            ),
            store_name: config.store_name.clone(),
            sales_channel_name: config.sales_channel_name.clone(),
            shipping_profile_type: config.shipping_profile_type.clone(),
        }
    }

    async fn first_store(&self) -> Result<StoreId, SeedError> {
        self.stores
            .list(())
            .await?
            .first()
            .map(|store| store.id)
            .ok_or(SeedError::MissingTarget {
                kind: "store",
                selector: "first".to_string(),
            })
    }

    async fn sales_channel(&self) -> Result<SalesChannelId, SeedError> {
        let filter = SalesChannelFilter {
            name: Some(self.sales_channel_name.clone()),
        };
        self.sales_channels
            .list(filter)
            .await?
            .first()
            .map(|channel| channel.id)
            .ok_or_else(|| SeedError::MissingTarget {
                kind: "sales channel",
                selector: self.sales_channel_name.clone(),
            })
    }

    async fn shipping_profile(&self) -> Result<ShippingProfileId, SeedError> {
        let filter = ShippingProfileFilter {
            profile_type: Some(self.shipping_profile_type.clone()),
        };
        self.shipping_profiles
            .list(filter)
            .await?
            .first()
            .map(|profile| profile.id)
            .ok_or_else(|| SeedError::MissingTarget {
                kind: "shipping profile",
                selector: self.shipping_profile_type.clone(),
            })
    }

    async fn stock_location(&self) -> Result<StockLocationId, SeedError> {
        self.stock_locations
            .list(())
            .await?
            .first()
            .map(|location| location.id)
            .ok_or(SeedError::MissingTarget {
                kind: "stock location",
                selector: "first".to_string(),
            })
    }

    /// Looks up the four targets concurrently, then renames the store.
    pub async fn resolve_targets(&self) -> Result<SeedTargets, SeedError> {
        let (store_id, sales_channel_id, shipping_profile_id, location_id) = tokio::try_join!(
            self.first_store(),
            self.sales_channel(),
            self.shipping_profile(),
            self.stock_location(),
        )?;

        let store = self
            .stores
            .update_store(
                store_id,
                StoreUpdate {
                    name: Some(self.store_name.clone()),
                },
            )
            .await?;
        info!(store = %store.id, name = %store.name, "Store renamed");

        Ok(SeedTargets {
            store_id,
            sales_channel_id,
            shipping_profile_id,
            location_id,
        })
    }

    /// Runs all three phases and reports what was created.
    pub async fn run(&self, catalog: CatalogDefinition) -> Result<SeedSummary, SeedError> {
        let targets = self
            .resolve_targets()
            .instrument(info_span!("resolve_targets"))
            .await?;

        let loaded = self
            .loader
            .load(catalog, &targets)
            .instrument(info_span!("load_catalog"))
            .await?;

        let reconciled = self
            .reconciler
            .reconcile(targets.location_id)
            .instrument(info_span!("reconcile_inventory"))
            .await?;

        Ok(SeedSummary {
            categories: loaded.categories,
            products: loaded.products,
            variants: loaded.variants,
            inventory_levels: reconciled.created,
        })
    }
}
