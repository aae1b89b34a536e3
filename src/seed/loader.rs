//! # Catalog Loader
//!
//! Submits a [`CatalogDefinition`] to the catalog service: categories in one batch,
//! then products (options, variants and prices inlined) in a second batch. Category
//! names are resolved to identities between the two, and every name must resolve
//! before the product batch is sent.

use super::catalog::{CatalogDefinition, CategoryDefinition, ProductDefinition};
use super::error::SeedError;
use super::SeedTargets;
use crate::clients::{CategoryClient, ProductClient};
use crate::model::{Category, CategoryId, Product, ProductCreate};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Category name → identity for the categories created in the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex(BTreeMap<String, CategoryId>);

impl CategoryIndex {
    pub fn from_categories(categories: &[Category]) -> Self {
        Self(
            categories
                .iter()
                .map(|c| (c.name.clone(), c.id))
                .collect(),
        )
    }

    /// Names are matched the way the backend stores them, without surrounding blanks.
    pub fn resolve(&self, name: &str) -> Option<CategoryId> {
        self.0.get(name.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Counts of what [`CatalogLoader::load`] created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub categories: usize,
    pub products: usize,
    pub variants: usize,
}

/// Converts product definitions into backend payloads.
///
/// # Errors
/// [`SeedError::UnknownCategory`] for the first category name that is not in `index`.
pub fn build_products(
    definitions: Vec<ProductDefinition>,
    index: &CategoryIndex,
    targets: &SeedTargets,
) -> Result<Vec<ProductCreate>, SeedError> {
    definitions
        .into_iter()
        .map(|definition| {
            let category_ids = definition
                .categories
                .iter()
                .map(|name| {
                    index.resolve(name).ok_or_else(|| SeedError::UnknownCategory {
                        product: definition.handle.clone(),
                        category: name.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ProductCreate {
                title: definition.title,
                handle: definition.handle,
                description: definition.description,
                weight: definition.weight,
                status: definition.status,
                shipping_profile_id: targets.shipping_profile_id,
                images: definition.images,
                options: definition.options,
                variants: definition.variants,
                category_ids,
                sales_channel_ids: vec![targets.sales_channel_id],
            })
        })
        .collect()
}

pub struct CatalogLoader {
    categories: CategoryClient,
    products: ProductClient,
}

impl CatalogLoader {
    pub fn new(categories: CategoryClient, products: ProductClient) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Creates every category in one batch and indexes the result by name.
    ///
    /// The backend does not promise to return categories in input order, so the
    /// index is built from the returned names.
    #[instrument(skip_all, fields(count = definitions.len()))]
    pub async fn create_categories(
        &self,
        definitions: Vec<CategoryDefinition>,
    ) -> Result<CategoryIndex, SeedError> {
        let created = self.categories.create_categories(definitions).await?;
        let index = CategoryIndex::from_categories(&created);
        info!(categories = index.len(), "Created categories");
        Ok(index)
    }

    #[instrument(skip_all, fields(count = payloads.len()))]
    pub async fn create_products(
        &self,
        payloads: Vec<ProductCreate>,
    ) -> Result<Vec<Product>, SeedError> {
        let created = self.products.create_products(payloads).await?;
        info!(products = created.len(), "Created products");
        Ok(created)
    }

    /// Creates categories, resolves category names, then creates products.
    pub async fn load(
        &self,
        catalog: CatalogDefinition,
        targets: &SeedTargets,
    ) -> Result<LoadReport, SeedError> {
        let index = self.create_categories(catalog.categories).await?;
        let payloads = build_products(catalog.products, &index, targets)?;
        let products = self.create_products(payloads).await?;

        Ok(LoadReport {
            categories: index.len(),
            products: products.len(),
            variants: products.iter().map(|p| p.variants.len()).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CategoryCreate, ProductOption, ProductStatus, SalesChannelId, ShippingProfileId,
        StockLocationId, StoreId, VariantCreate,
    };
    use resource_actor::mock::{create_mock_client, MockClient};

    fn targets() -> SeedTargets {
        SeedTargets {
            store_id: StoreId(1),
            sales_channel_id: SalesChannelId(2),
            shipping_profile_id: ShippingProfileId(3),
            location_id: StockLocationId(4),
        }
    }

    fn category(id: u32, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            handle: crate::model::slugify(name),
            description: String::new(),
            is_active: true,
        }
    }

    fn product(handle: &str, categories: &[&str]) -> ProductDefinition {
        ProductDefinition {
            title: handle.to_uppercase(),
            handle: handle.to_string(),
            description: String::new(),
            weight: 10,
            status: ProductStatus::Published,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            images: vec![],
            options: vec![ProductOption {
                title: "Tip".to_string(),
                values: vec!["Standard".to_string()],
            }],
            variants: vec![VariantCreate {
                title: "Standard".to_string(),
                sku: format!("{}-STD", handle),
                options: [("Tip".to_string(), "Standard".to_string())].into(),
                prices: vec![],
            }],
        }
    }

    #[test]
    fn test_build_products_resolves_names_and_attaches_targets() {
        let index = CategoryIndex::from_categories(&[
            category(7, "Ortodontie"),
            category(8, "Consumabile"),
        ]);

        let payloads = build_products(
            vec![product("brackets", &["Ortodontie", "Consumabile"])],
            &index,
            &targets(),
        )
        .unwrap();

        assert_eq!(payloads[0].category_ids, vec![CategoryId(7), CategoryId(8)]);
        assert_eq!(payloads[0].sales_channel_ids, vec![SalesChannelId(2)]);
        assert_eq!(payloads[0].shipping_profile_id, ShippingProfileId(3));
    }

    #[test]
    fn test_resolve_ignores_surrounding_blanks() {
        let index = CategoryIndex::from_categories(&[category(3, "Consumabile")]);

        assert_eq!(index.resolve("Consumabile "), Some(CategoryId(3)));
        assert_eq!(index.resolve(" Consumabile"), Some(CategoryId(3)));
        assert_eq!(index.resolve("consumabile"), None);
    }

    #[test]
    fn test_build_products_rejects_unknown_category() {
        let index = CategoryIndex::from_categories(&[category(1, "Ortodontie")]);

        let result = build_products(
            vec![product("brackets", &["Ortodontie"]), product("gloves", &["Manusi"])],
            &index,
            &targets(),
        );

        assert_eq!(
            result,
            Err(SeedError::UnknownCategory {
                product: "gloves".to_string(),
                category: "Manusi".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_category_aborts_before_product_request() {
        let mut categories = MockClient::<Category>::new();
        categories
            .expect_create_many()
            .return_ok(vec![category(1, "Ortodontie")]);
        let (product_client, mut product_requests) = create_mock_client::<Product>(10);

        let loader = CatalogLoader::new(
            CategoryClient::new(categories.client()),
            ProductClient::new(product_client),
        );
        let catalog = CatalogDefinition {
            categories: vec![CategoryCreate {
                name: "Ortodontie".to_string(),
                description: String::new(),
                is_active: true,
            }],
            products: vec![product("gloves", &["Consumabile"])],
        };

        let result = loader.load(catalog, &targets()).await;

        assert!(matches!(result, Err(SeedError::UnknownCategory { .. })));
        assert!(product_requests.try_recv().is_err());
        categories.verify();
    }
}
