//! ActorEntity trait implementation for the Category domain type.

use super::error::CategoryError;
use crate::model::{slugify, Category, CategoryCreate, CategoryFilter, CategoryId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = Infallible;
    type Filter = CategoryFilter;
    type Context = ();
    type Error = CategoryError;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Creates a new Category, deriving its handle from the name.
    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim().to_string();
        let handle = slugify(&name);
        if handle.is_empty() {
            return Err(CategoryError::InvalidName(params.name));
        }
        Ok(Self {
            id,
            name,
            handle,
            description: params.description,
            is_active: params.is_active,
        })
    }

    fn matches(&self, filter: &CategoryFilter) -> bool {
        filter
            .name
            .as_ref()
            .map_or(true, |name| name.trim() == self.name)
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![format!("handle:{}", self.handle)]
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
