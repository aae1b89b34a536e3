//! # Directory Clients
//!
//! Clients for the store, sales channel, shipping profile and stock location actors.
//! The seed run only reads these (and renames the store); the `create_*` methods are
//! used when bootstrapping a fresh backend.
use crate::directory_actor::DirectoryError;
use crate::model::{
    SalesChannel, SalesChannelCreate, SalesChannelId, ShippingProfile, ShippingProfileCreate,
    ShippingProfileId, StockLocation, StockLocationCreate, StockLocationId, Store, StoreCreate,
    StoreId, StoreUpdate,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Store actor.
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient<Store>,
}

impl StoreClient {
    pub fn new(inner: ResourceClient<Store>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_store(&self, params: StoreCreate) -> Result<StoreId, DirectoryError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(DirectoryError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn update_store(
        &self,
        id: StoreId,
        update: StoreUpdate,
    ) -> Result<Store, DirectoryError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(DirectoryError::from_framework)
    }
}

#[derive(Clone)]
pub struct SalesChannelClient {
    inner: ResourceClient<SalesChannel>,
}

impl SalesChannelClient {
    pub fn new(inner: ResourceClient<SalesChannel>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_sales_channel(
        &self,
        params: SalesChannelCreate,
    ) -> Result<SalesChannelId, DirectoryError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(DirectoryError::from_framework)
    }
}

#[derive(Clone)]
pub struct ShippingProfileClient {
    inner: ResourceClient<ShippingProfile>,
}

impl ShippingProfileClient {
    pub fn new(inner: ResourceClient<ShippingProfile>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_shipping_profile(
        &self,
        params: ShippingProfileCreate,
    ) -> Result<ShippingProfileId, DirectoryError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(DirectoryError::from_framework)
    }
}

#[derive(Clone)]
pub struct StockLocationClient {
    inner: ResourceClient<StockLocation>,
}

impl StockLocationClient {
    pub fn new(inner: ResourceClient<StockLocation>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_stock_location(
        &self,
        params: StockLocationCreate,
    ) -> Result<StockLocationId, DirectoryError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(DirectoryError::from_framework)
    }
}

/// The four directory clients share the same error mapping.
macro_rules! directory_client {
    ($client:ty, $entity:ty) => {
        #[async_trait]
        impl ActorClient<$entity> for $client {
            type Error = DirectoryError;

            fn inner(&self) -> &ResourceClient<$entity> {
                &self.inner
            }

            fn map_error(e: FrameworkError) -> Self::Error {
                DirectoryError::from_framework(e)
            }
        }
    };
}

directory_client!(StoreClient, Store);
directory_client!(SalesChannelClient, SalesChannel);
directory_client!(ShippingProfileClient, ShippingProfile);
directory_client!(StockLocationClient, StockLocation);
