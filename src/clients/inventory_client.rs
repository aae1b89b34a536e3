//! # Inventory Clients
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryItem, InventoryItemCreate, InventoryLevel, InventoryLevelCreate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the InventoryItem actor.
#[derive(Clone)]
pub struct InventoryItemClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryItemClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn create_items(
        &self,
        items: Vec<InventoryItemCreate>,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        debug!("Sending request");
        self.inner
            .create_many(items)
            .await
            .map_err(InventoryError::from_framework)
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryItemClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::from_framework(e)
    }
}

/// Client for interacting with the InventoryLevel actor.
#[derive(Clone)]
pub struct InventoryLevelClient {
    inner: ResourceClient<InventoryLevel>,
}

impl InventoryLevelClient {
    pub fn new(inner: ResourceClient<InventoryLevel>) -> Self {
        Self { inner }
    }

    /// Creates all levels in one request; a level that already exists for the same
    /// (item, location) pair rejects the whole batch.
    #[instrument(skip(self, levels), fields(count = levels.len()))]
    pub async fn create_levels(
        &self,
        levels: Vec<InventoryLevelCreate>,
    ) -> Result<Vec<InventoryLevel>, InventoryError> {
        debug!("Sending request");
        self.inner
            .create_many(levels)
            .await
            .map_err(InventoryError::from_framework)
    }
}

#[async_trait]
impl ActorClient<InventoryLevel> for InventoryLevelClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryLevel> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::from_framework(e)
    }
}
