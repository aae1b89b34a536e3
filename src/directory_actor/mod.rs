//! # Directory Actors
//!
//! Store-level records the seed run resolves before it writes anything: the store,
//! its sales channels, shipping profiles and stock locations. None of them has
//! dependencies; only the store accepts updates.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{SalesChannelClient, ShippingProfileClient, StockLocationClient, StoreClient};
use crate::model::{SalesChannel, ShippingProfile, StockLocation, Store};
use resource_actor::ResourceActor;

/// Creates a new Store actor and its client.
pub fn new_stores(buffer_size: usize) -> (ResourceActor<Store>, StoreClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, StoreClient::new(generic_client))
}

pub fn new_sales_channels(
    buffer_size: usize,
) -> (ResourceActor<SalesChannel>, SalesChannelClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SalesChannelClient::new(generic_client))
}

pub fn new_shipping_profiles(
    buffer_size: usize,
) -> (ResourceActor<ShippingProfile>, ShippingProfileClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ShippingProfileClient::new(generic_client))
}

pub fn new_stock_locations(
    buffer_size: usize,
) -> (ResourceActor<StockLocation>, StockLocationClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, StockLocationClient::new(generic_client))
}
