//! The built-in dental supplies catalog: six categories and sixteen products,
//! priced in EUR and USD.

use super::catalog::CatalogDefinition;
use super::error::SeedError;

const DENTAL_CATALOG: &str = include_str!("dental_catalog.json");

/// Parses the embedded catalog.
pub fn catalog() -> Result<CatalogDefinition, SeedError> {
    CatalogDefinition::from_json_str(DENTAL_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dental_catalog_parses() {
        let catalog = catalog().unwrap();

        assert_eq!(catalog.categories.len(), 6);
        assert_eq!(catalog.products.len(), 16);
        assert_eq!(catalog.variant_count(), 49);
    }

    #[test]
    fn test_dental_catalog_is_self_consistent() {
        let catalog = catalog().unwrap();
        let names: HashSet<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();

        let mut skus = HashSet::new();
        for product in &catalog.products {
            for category in &product.categories {
                assert!(names.contains(category.as_str()), "{} -> {}", product.handle, category);
            }
            for variant in &product.variants {
                assert!(skus.insert(variant.sku.as_str()), "duplicate SKU {}", variant.sku);
                assert_eq!(variant.prices.len(), 2);
            }
        }
    }
}
