//! # Inventory Reconciler
//!
//! Creates a stock level at the target location for every inventory item that does
//! not have one yet. Running it again after a successful run finds nothing missing
//! and writes nothing.

use super::error::SeedError;
use crate::clients::{ActorClient, InventoryItemClient, InventoryLevelClient};
use crate::model::{
    InventoryItemFilter, InventoryItemId, InventoryLevelCreate, InventoryLevelFilter,
    StockLocationId,
};
use std::collections::HashSet;
use tracing::{info, instrument};

/// Items of `all` that are not in `stocked`, in the order of `all`, without repeats.
pub fn missing_items(
    all: &[InventoryItemId],
    stocked: &[InventoryItemId],
) -> Vec<InventoryItemId> {
    let stocked: HashSet<InventoryItemId> = stocked.iter().copied().collect();
    let mut seen = HashSet::new();
    all.iter()
        .copied()
        .filter(|id| !stocked.contains(id) && seen.insert(*id))
        .collect()
}

/// One level record per missing item.
pub fn plan(
    location_id: StockLocationId,
    missing: &[InventoryItemId],
    stocked_quantity: u32,
) -> Vec<InventoryLevelCreate> {
    missing
        .iter()
        .map(|&inventory_item_id| InventoryLevelCreate {
            inventory_item_id,
            location_id,
            stocked_quantity,
        })
        .collect()
}

/// Outcome of [`InventoryReconciler::reconcile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Inventory items known to the backend.
    pub known_items: usize,
    /// Items that already had a level at the location.
    pub already_stocked: usize,
    /// Levels created by this run.
    pub created: usize,
}

pub struct InventoryReconciler {
    items: InventoryItemClient,
    levels: InventoryLevelClient,
    stocked_quantity: u32,
}

impl InventoryReconciler {
    pub fn new(
        items: InventoryItemClient,
        levels: InventoryLevelClient,
        stocked_quantity: u32,
    ) -> Self {
        Self {
            items,
            levels,
            stocked_quantity,
        }
    }

    #[instrument(skip(self), fields(location = %location_id))]
    pub async fn reconcile(
        &self,
        location_id: StockLocationId,
    ) -> Result<ReconcileReport, SeedError> {
        let all: Vec<InventoryItemId> = self
            .items
            .list(InventoryItemFilter::default())
            .await?
            .into_iter()
            .map(|item| item.id)
            .collect();
        let stocked: Vec<InventoryItemId> = self
            .levels
            .list(InventoryLevelFilter::at_location(location_id))
            .await?
            .into_iter()
            .map(|level| level.inventory_item_id)
            .collect();

        let missing = missing_items(&all, &stocked);
        let known_items = all.iter().collect::<HashSet<_>>().len();
        let mut report = ReconcileReport {
            known_items,
            already_stocked: known_items - missing.len(),
            created: 0,
        };

        if missing.is_empty() {
            info!(known = report.known_items, "Every inventory item is already stocked");
            return Ok(report);
        }

        let records = plan(location_id, &missing, self.stocked_quantity);
        report.created = self.levels.create_levels(records).await?.len();
        info!(
            created = report.created,
            quantity = self.stocked_quantity,
            "Created inventory levels"
        );
        Ok(report)
    }
}
