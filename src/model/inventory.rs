use crate::model::StockLocationId;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for Inventory Items.
    InventoryItemId,
    "iitem"
);

resource_id!(
    /// Type-safe identifier for Inventory Levels.
    InventoryLevelId,
    "ilev"
);

/// The stockable unit behind one variant, independent of location.
///
/// Items are created by the product actor when a product is created; the seeding
/// code only ever lists them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub sku: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItemCreate {
    pub sku: String,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryItemFilter {
    pub sku: Option<String>,
}

/// The stocked quantity of one inventory item at one stock location.
///
/// There is at most one level per (item, location) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryLevel {
    pub id: InventoryLevelId,
    pub inventory_item_id: InventoryItemId,
    pub location_id: StockLocationId,
    pub stocked_quantity: u32,
}

/// Payload for creating an inventory level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevelCreate {
    pub inventory_item_id: InventoryItemId,
    pub location_id: StockLocationId,
    pub stocked_quantity: u32,
}

/// Selects levels by location and/or item.
#[derive(Debug, Clone, Default)]
pub struct InventoryLevelFilter {
    pub location_id: Option<StockLocationId>,
    pub inventory_item_id: Option<InventoryItemId>,
}

impl InventoryLevelFilter {
    pub fn at_location(location_id: StockLocationId) -> Self {
        Self {
            location_id: Some(location_id),
            inventory_item_id: None,
        }
    }
}
