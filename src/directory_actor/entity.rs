//! ActorEntity trait implementations for the store directory types.

use super::error::DirectoryError;
use crate::model::{
    SalesChannel, SalesChannelCreate, SalesChannelFilter, SalesChannelId, ShippingProfile,
    ShippingProfileCreate, ShippingProfileFilter, ShippingProfileId, StockLocation,
    StockLocationCreate, StockLocationId, Store, StoreCreate, StoreId, StoreUpdate,
};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

fn non_empty(field: &'static str, value: String) -> Result<String, DirectoryError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(DirectoryError::EmptyField(field))
    } else {
        Ok(value)
    }
}

#[async_trait]
impl ActorEntity for Store {
    type Id = StoreId;
    type Create = StoreCreate;
    type Update = StoreUpdate;
    type Filter = ();
    type Context = ();
    type Error = DirectoryError;

    fn id(&self) -> &StoreId {
        &self.id
    }

    fn from_create_params(id: StoreId, params: StoreCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: non_empty("store name", params.name)?,
        })
    }

    /// Handles updates to the Store entity.
    ///
    /// # Fields Updated
    /// - `name`: Display name of the store
    async fn on_update(&mut self, update: StoreUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = non_empty("store name", name)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for SalesChannel {
    type Id = SalesChannelId;
    type Create = SalesChannelCreate;
    type Update = Infallible;
    type Filter = SalesChannelFilter;
    type Context = ();
    type Error = DirectoryError;

    fn id(&self) -> &SalesChannelId {
        &self.id
    }

    fn from_create_params(
        id: SalesChannelId,
        params: SalesChannelCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: non_empty("sales channel name", params.name)?,
            description: params.description,
            is_disabled: false,
        })
    }

    fn matches(&self, filter: &SalesChannelFilter) -> bool {
        filter
            .name
            .as_ref()
            .map_or(true, |name| name.trim() == self.name)
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![format!("name:{}", self.name)]
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

#[async_trait]
impl ActorEntity for ShippingProfile {
    type Id = ShippingProfileId;
    type Create = ShippingProfileCreate;
    type Update = Infallible;
    type Filter = ShippingProfileFilter;
    type Context = ();
    type Error = DirectoryError;

    fn id(&self) -> &ShippingProfileId {
        &self.id
    }

    fn from_create_params(
        id: ShippingProfileId,
        params: ShippingProfileCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: non_empty("shipping profile name", params.name)?,
            profile_type: non_empty("shipping profile type", params.profile_type)?,
        })
    }

    fn matches(&self, filter: &ShippingProfileFilter) -> bool {
        filter
            .profile_type
            .as_ref()
            .map_or(true, |profile_type| profile_type.trim() == self.profile_type)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

#[async_trait]
impl ActorEntity for StockLocation {
    type Id = StockLocationId;
    type Create = StockLocationCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = DirectoryError;

    fn id(&self) -> &StockLocationId {
        &self.id
    }

    fn from_create_params(
        id: StockLocationId,
        params: StockLocationCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: non_empty("stock location name", params.name)?,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
