//! Catalog definitions: what the loader submits, with categories referenced by name.

use super::error::SeedError;
use crate::model::{CategoryCreate, ProductOption, ProductStatus, VariantCreate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A category to create. Same shape as the backend payload.
pub type CategoryDefinition = CategoryCreate;

/// A product to create, before its category names are resolved to identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDefinition {
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    /// Grams.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub status: ProductStatus,
    /// Category names, resolved against the categories created in the same run.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<VariantCreate>,
}

/// Ordered categories and products to seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub categories: Vec<CategoryDefinition>,
    pub products: Vec<ProductDefinition>,
}

impl CatalogDefinition {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|e| SeedError::Catalog(e.to_string()))
    }

    /// Reads a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Number of variants across all products.
    pub fn variant_count(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }
}
