//! Errors that terminate a seed run.

use crate::category_actor::CategoryError;
use crate::directory_actor::DirectoryError;
use crate::inventory_actor::InventoryError;
use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeedError {
    /// A product references a category name that was not created in this run.
    #[error("Product {product:?} references unknown category {category:?}")]
    UnknownCategory { product: String, category: String },

    /// The backend has no store, sales channel, shipping profile or stock location
    /// matching the configuration.
    #[error("No {kind} found matching {selector:?}")]
    MissingTarget {
        kind: &'static str,
        selector: String,
    },

    /// The catalog definition could not be read or parsed.
    #[error("Catalog definition error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
