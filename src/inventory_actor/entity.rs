//! ActorEntity trait implementations for [`InventoryItem`] and [`InventoryLevel`].

use super::error::InventoryError;
use super::LevelContext;
use crate::clients::ActorClient;
use crate::model::{
    InventoryItem, InventoryItemCreate, InventoryItemFilter, InventoryItemId, InventoryLevel,
    InventoryLevelCreate, InventoryLevelFilter, InventoryLevelId,
};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = InventoryItemId;
    type Create = InventoryItemCreate;
    type Update = Infallible;
    type Filter = InventoryItemFilter;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &InventoryItemId {
        &self.id
    }

    fn from_create_params(
        id: InventoryItemId,
        params: InventoryItemCreate,
    ) -> Result<Self, Self::Error> {
        let sku = params.sku.trim().to_string();
        if sku.is_empty() {
            return Err(InventoryError::EmptySku);
        }
        Ok(Self {
            id,
            sku,
            title: params.title,
        })
    }

    fn matches(&self, filter: &InventoryItemFilter) -> bool {
        filter.sku.as_ref().map_or(true, |sku| sku == &self.sku)
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![format!("sku:{}", self.sku)]
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

#[async_trait]
impl ActorEntity for InventoryLevel {
    type Id = InventoryLevelId;
    type Create = InventoryLevelCreate;
    type Update = Infallible;
    type Filter = InventoryLevelFilter;
    type Context = LevelContext;
    type Error = InventoryError;

    fn id(&self) -> &InventoryLevelId {
        &self.id
    }

    fn from_create_params(
        id: InventoryLevelId,
        params: InventoryLevelCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            inventory_item_id: params.inventory_item_id,
            location_id: params.location_id,
            stocked_quantity: params.stocked_quantity,
        })
    }

    fn matches(&self, filter: &InventoryLevelFilter) -> bool {
        filter
            .location_id
            .map_or(true, |location| location == self.location_id)
            && filter
                .inventory_item_id
                .map_or(true, |item| item == self.inventory_item_id)
    }

    /// One level per (item, location) pair.
    fn unique_keys(&self) -> Vec<String> {
        vec![format!("{}@{}", self.inventory_item_id, self.location_id)]
    }

    /// Checks that the item and the location both exist.
    async fn validate(&self, ctx: &LevelContext) -> Result<(), Self::Error> {
        let item = ctx
            .inventory_items
            .get(self.inventory_item_id)
            .await?;
        if item.is_none() {
            return Err(InventoryError::MissingReference {
                kind: "inventory item",
                id: self.inventory_item_id.to_string(),
            });
        }

        let location = ctx
            .stock_locations
            .get(self.location_id)
            .await
            .map_err(|e| InventoryError::ActorCommunicationError(e.to_string()))?;
        if location.is_none() {
            return Err(InventoryError::MissingReference {
                kind: "stock location",
                id: self.location_id.to_string(),
            });
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &LevelContext,
    ) -> Result<(), Self::Error> {
        match update {}
    }
}
