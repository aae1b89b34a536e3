use crate::clients::{
    SalesChannelClient, ShippingProfileClient, StockLocationClient, StoreClient,
};
use crate::directory_actor::DirectoryError;
use crate::inventory_actor::LevelContext;
use crate::model::{SalesChannelCreate, ShippingProfileCreate, StockLocationCreate, StoreCreate};
use crate::product_actor::ProductContext;
use crate::seed::{SeedClients, SeedTargets};
use tracing::{error, info};

/// Records [`StoreBackend::bootstrap`] creates in an empty backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendDefaults {
    pub store_name: String,
    pub sales_channel_name: String,
    pub shipping_profile_name: String,
    pub shipping_profile_type: String,
    pub stock_location_name: String,
}

impl Default for BackendDefaults {
    fn default() -> Self {
        Self {
            store_name: "Medusa Store".to_string(),
            sales_channel_name: "Default Sales Channel".to_string(),
            shipping_profile_name: "Default Shipping Profile".to_string(),
            shipping_profile_type: "default".to_string(),
            stock_location_name: "European Warehouse".to_string(),
        }
    }
}

/// The in-process store backend: one actor per resource type, wired together.
///
/// # Architecture
///
/// - **Directory actors** (store, sales channel, shipping profile, stock location):
///   no dependencies
/// - **Category actor**: no dependencies
/// - **Inventory item actor**: no dependencies
/// - **Product actor**: checks categories, sales channels and shipping profiles, and
///   creates inventory items (`Context = ProductContext`)
/// - **Inventory level actor**: checks inventory items and stock locations
///   (`Context = LevelContext`)
///
/// The dependency graph is acyclic, so dropping every client shuts the whole
/// backend down.
///
/// # Example
///
/// ```ignore
/// let backend = StoreBackend::new(32);
/// backend.bootstrap(&BackendDefaults::default()).await?;
///
/// let seeder = Seeder::new(backend.clients(), &config);
/// let summary = seeder.run(catalog).await?;
/// drop(seeder);
///
/// backend.shutdown().await?;
/// ```
pub struct StoreBackend {
    clients: SeedClients,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreBackend {
    /// Spawns every actor with `buffer_size` as its mailbox capacity.
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (store_actor, stores) = crate::directory_actor::new_stores(buffer_size);
        let (channel_actor, sales_channels) =
            crate::directory_actor::new_sales_channels(buffer_size);
        let (profile_actor, shipping_profiles) =
            crate::directory_actor::new_shipping_profiles(buffer_size);
        let (location_actor, stock_locations) =
            crate::directory_actor::new_stock_locations(buffer_size);
        let (category_actor, categories) = crate::category_actor::new(buffer_size);
        let (item_actor, inventory_items) = crate::inventory_actor::new_items(buffer_size);
        let (level_actor, inventory_levels) = crate::inventory_actor::new_levels(buffer_size);
        let (product_actor, products) = crate::product_actor::new(buffer_size);

        // 2. Start actors with injected context
        let mut handles = vec![
            tokio::spawn(store_actor.run(())),
            tokio::spawn(channel_actor.run(())),
            tokio::spawn(profile_actor.run(())),
            tokio::spawn(location_actor.run(())),
            tokio::spawn(category_actor.run(())),
            tokio::spawn(item_actor.run(())),
        ];
        handles.push(tokio::spawn(product_actor.run(ProductContext {
            categories: categories.clone(),
            sales_channels: sales_channels.clone(),
            shipping_profiles: shipping_profiles.clone(),
            inventory_items: inventory_items.clone(),
        })));
        handles.push(tokio::spawn(level_actor.run(LevelContext {
            inventory_items: inventory_items.clone(),
            stock_locations: stock_locations.clone(),
        })));

        Self {
            clients: SeedClients {
                stores,
                sales_channels,
                shipping_profiles,
                stock_locations,
                categories,
                products,
                inventory_items,
                inventory_levels,
            },
            handles,
        }
    }

    /// Clones of every client. Drop them before [`StoreBackend::shutdown`].
    pub fn clients(&self) -> SeedClients {
        self.clients.clone()
    }

    pub fn stores(&self) -> &StoreClient {
        &self.clients.stores
    }

    pub fn sales_channels(&self) -> &SalesChannelClient {
        &self.clients.sales_channels
    }

    pub fn shipping_profiles(&self) -> &ShippingProfileClient {
        &self.clients.shipping_profiles
    }

    pub fn stock_locations(&self) -> &StockLocationClient {
        &self.clients.stock_locations
    }

    /// Creates the store, sales channel, shipping profile and stock location a
    /// fresh backend starts with.
    pub async fn bootstrap(
        &self,
        defaults: &BackendDefaults,
    ) -> Result<SeedTargets, DirectoryError> {
        let (store_id, sales_channel_id, shipping_profile_id, location_id) = tokio::try_join!(
            self.clients.stores.create_store(StoreCreate {
                name: defaults.store_name.clone(),
            }),
            self.clients.sales_channels.create_sales_channel(SalesChannelCreate {
                name: defaults.sales_channel_name.clone(),
                description: "Created by default".to_string(),
            }),
            self.clients.shipping_profiles.create_shipping_profile(ShippingProfileCreate {
                name: defaults.shipping_profile_name.clone(),
                profile_type: defaults.shipping_profile_type.clone(),
            }),
            self.clients.stock_locations.create_stock_location(StockLocationCreate {
                name: defaults.stock_location_name.clone(),
            }),
        )?;
        info!(store = %store_id, location = %location_id, "Backend bootstrapped");

        Ok(SeedTargets {
            store_id,
            sales_channel_id,
            shipping_profile_id,
            location_id,
        })
    }

    /// Gracefully shuts down the backend.
    ///
    /// Dropping the clients closes the channels of the actors nobody depends on;
    /// as those exit they drop the clients held in their context, which closes the
    /// next layer. Any outstanding clone of a client keeps its actor alive, so
    /// this waits until every clone handed out by [`StoreBackend::clients`] is gone.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down backend...");

        drop(self.clients);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Backend shutdown complete.");
        Ok(())
    }
}
