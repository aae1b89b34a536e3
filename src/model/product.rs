use crate::model::{CategoryId, InventoryItemId, SalesChannelId, ShippingProfileId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

resource_id!(
    /// Type-safe identifier for Products.
    ProductId,
    "prod"
);

/// Identifier of a variant: the owning product plus the variant's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariantId {
    pub product: u32,
    pub index: u32,
}

impl Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "variant_{}_{}", self.product, self.index)
    }
}

/// Publication state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    #[default]
    Published,
}

/// A price in minor currency units (cents), e.g. `4500` + `"eur"` is €45.00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: u64,
    pub currency_code: String,
}

impl Price {
    pub fn new(amount: u64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

/// A named option axis with its ordered set of allowed values (e.g. "Size": S, M, L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub title: String,
    pub values: Vec<String>,
}

/// Variant payload: one option value per axis, plus its prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantCreate {
    pub title: String,
    pub sku: String,
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub prices: Vec<Price>,
}

/// Represents a sellable variant of a product.
///
/// `inventory_item_id` is filled in by the backend when the product is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductVariant {
    pub id: VariantId,
    pub title: String,
    pub sku: String,
    pub options: BTreeMap<String, String>,
    pub prices: Vec<Price>,
    pub inventory_item_id: Option<InventoryItemId>,
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Option/variant validation ([`ProductError`](crate::product_actor::ProductError))
/// - Inventory items created per variant ([`ProductContext`](crate::product_actor::ProductContext))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub handle: String,
    pub description: String,
    /// Grams.
    pub weight: u32,
    pub status: ProductStatus,
    pub shipping_profile_id: ShippingProfileId,
    pub images: Vec<String>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<ProductVariant>,
    pub category_ids: Vec<CategoryId>,
    pub sales_channel_ids: Vec<SalesChannelId>,
}

/// Payload for creating a product with its options and variants inlined.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub title: String,
    pub handle: String,
    pub description: String,
    pub weight: u32,
    pub status: ProductStatus,
    pub shipping_profile_id: ShippingProfileId,
    pub images: Vec<String>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<VariantCreate>,
    pub category_ids: Vec<CategoryId>,
    pub sales_channel_ids: Vec<SalesChannelId>,
}

/// Selects products by handle.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub handle: Option<String>,
}
