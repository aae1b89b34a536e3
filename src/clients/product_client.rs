//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor. Reference
//! checks and inventory item creation happen inside the actor's hooks, so the client
//! only forwards payloads and maps errors.
use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Creates all products in one request and returns them with their variants
    /// linked to inventory items.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn create_products(
        &self,
        products: Vec<ProductCreate>,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .create_many(products)
            .await
            .map_err(ProductError::from_framework)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from_framework(e)
    }
}
