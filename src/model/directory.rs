//! Store-level resources the seed run looks up before loading the catalog:
//! the store itself, sales channels, shipping profiles and stock locations.

use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for Stores.
    StoreId,
    "store"
);

resource_id!(
    /// Type-safe identifier for Sales Channels.
    SalesChannelId,
    "sc"
);

resource_id!(
    /// Type-safe identifier for Shipping Profiles.
    ShippingProfileId,
    "sp"
);

resource_id!(
    /// Type-safe identifier for Stock Locations.
    StockLocationId,
    "sloc"
);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct StoreCreate {
    pub name: String,
}

/// Payload for updating an existing store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesChannel {
    pub id: SalesChannelId,
    pub name: String,
    pub description: String,
    pub is_disabled: bool,
}

#[derive(Debug, Clone)]
pub struct SalesChannelCreate {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct SalesChannelFilter {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingProfile {
    pub id: ShippingProfileId,
    pub name: String,
    pub profile_type: String,
}

#[derive(Debug, Clone)]
pub struct ShippingProfileCreate {
    pub name: String,
    pub profile_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct ShippingProfileFilter {
    pub profile_type: Option<String>,
}

/// A warehouse inventory is tracked against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLocation {
    pub id: StockLocationId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct StockLocationCreate {
    pub name: String,
}
