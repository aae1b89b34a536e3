//! # Category Client
use crate::category_actor::CategoryError;
use crate::model::{Category, CategoryCreate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    /// Creates all categories in one request; none are stored if any is rejected.
    #[instrument(skip(self, categories), fields(count = categories.len()))]
    pub async fn create_categories(
        &self,
        categories: Vec<CategoryCreate>,
    ) -> Result<Vec<Category>, CategoryError> {
        debug!("Sending request");
        self.inner
            .create_many(categories)
            .await
            .map_err(CategoryError::from_framework)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CategoryError::from_framework(e)
    }
}
