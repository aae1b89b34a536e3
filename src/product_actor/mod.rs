//! # Product Actor
//!
//! Products carry their option matrix and variants inline. Creating a product
//! reaches three other actors to check references and a fourth to create the
//! inventory items behind its variants, so the actor runs with a [`ProductContext`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{
    CategoryClient, InventoryItemClient, ProductClient, SalesChannelClient, ShippingProfileClient,
};
use crate::model::Product;
use resource_actor::ResourceActor;

/// Clients the Product actor depends on, injected at `run()` time.
#[derive(Clone)]
pub struct ProductContext {
    pub categories: CategoryClient,
    pub sales_channels: SalesChannelClient,
    pub shipping_profiles: ShippingProfileClient,
    pub inventory_items: InventoryItemClient,
}

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
