//! # Inventory Actors
//!
//! Two resources live here: inventory items (one per product variant, created by the
//! product actor) and inventory levels (stock of an item at a location). Levels depend
//! on items and stock locations through [`LevelContext`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{InventoryItemClient, InventoryLevelClient, StockLocationClient};
use crate::model::{InventoryItem, InventoryLevel};
use resource_actor::ResourceActor;

/// Clients the inventory level actor depends on.
#[derive(Clone)]
pub struct LevelContext {
    pub inventory_items: InventoryItemClient,
    pub stock_locations: StockLocationClient,
}

/// Creates a new InventoryItem actor and its client.
pub fn new_items(buffer_size: usize) -> (ResourceActor<InventoryItem>, InventoryItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InventoryItemClient::new(generic_client))
}

/// Creates a new InventoryLevel actor and its client.
pub fn new_levels(buffer_size: usize) -> (ResourceActor<InventoryLevel>, InventoryLevelClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InventoryLevelClient::new(generic_client))
}
