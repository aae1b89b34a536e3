use catalog_seed::category_actor::CategoryError;
use catalog_seed::clients::ActorClient;
use catalog_seed::config::SeedConfig;
use catalog_seed::lifecycle::{BackendDefaults, StoreBackend};
use catalog_seed::model::{
    InventoryItemCreate, InventoryItemFilter, InventoryLevelCreate, InventoryLevelFilter, Price,
    ProductOption, ProductStatus, VariantCreate,
};
use catalog_seed::product_actor::ProductError;
use catalog_seed::seed::{
    dental, CatalogDefinition, CategoryDefinition, InventoryReconciler, ProductDefinition,
    SeedError, SeedSummary, Seeder,
};
use std::collections::BTreeMap;

fn category(name: &str) -> CategoryDefinition {
    CategoryDefinition {
        name: name.to_string(),
        description: format!("{} supplies", name),
        is_active: true,
    }
}

/// A product with one option axis and one variant per value.
fn product(handle: &str, category: &str, axis: &str, values: &[&str]) -> ProductDefinition {
    ProductDefinition {
        title: handle.replace('-', " "),
        handle: handle.to_string(),
        description: String::new(),
        weight: 100,
        status: ProductStatus::Published,
        categories: vec![category.to_string()],
        images: vec![],
        options: vec![ProductOption {
            title: axis.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }],
        variants: values
            .iter()
            .map(|value| VariantCreate {
                title: value.to_string(),
                sku: format!("{}-{}", handle, value).to_uppercase(),
                options: BTreeMap::from([(axis.to_string(), value.to_string())]),
                prices: vec![Price::new(1000, "eur"), Price::new(1200, "usd")],
            })
            .collect(),
    }
}

/// 2 categories, 3 products with 2, 3 and 1 variants.
fn small_catalog() -> CatalogDefinition {
    CatalogDefinition {
        categories: vec![category("Instrumente Dentare"), category("Consumabile")],
        products: vec![
            product("kit-sonde", "Instrumente Dentare", "Tip", &["Standard", "Premium"]),
            product("masti", "Consumabile", "Culoare", &["Albastru", "Verde", "Roz"]),
            product("oglinda", "Instrumente Dentare", "Marime", &["4"]),
        ],
    }
}

async fn bootstrapped() -> StoreBackend {
    let backend = StoreBackend::new(32);
    backend
        .bootstrap(&BackendDefaults::default())
        .await
        .unwrap();
    backend
}

#[tokio::test]
async fn test_seed_run_end_to_end() {
    let backend = bootstrapped().await;
    let config = SeedConfig::default();

    let seeder = Seeder::new(backend.clients(), &config);
    let summary = seeder.run(small_catalog()).await.unwrap();
    drop(seeder);

    assert_eq!(
        summary,
        SeedSummary {
            categories: 2,
            products: 3,
            variants: 6,
            inventory_levels: 6,
        }
    );

    let clients = backend.clients();
    let items = clients
        .inventory_items
        .list(InventoryItemFilter::default())
        .await
        .unwrap();
    assert_eq!(items.len(), 6);

    let levels = clients
        .inventory_levels
        .list(InventoryLevelFilter::default())
        .await
        .unwrap();
    assert_eq!(levels.len(), 6);
    assert!(levels.iter().all(|level| level.stocked_quantity == 500));

    let stores = clients.stores.list(()).await.unwrap();
    assert_eq!(stores[0].name, "DentStore - Dental Supplies");

    drop(clients);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reconcile_twice_writes_nothing_the_second_time() {
    let backend = bootstrapped().await;
    let config = SeedConfig::default();

    let seeder = Seeder::new(backend.clients(), &config);
    let summary = seeder.run(small_catalog()).await.unwrap();
    assert_eq!(summary.inventory_levels, 6);
    let location = seeder.resolve_targets().await.unwrap().location_id;
    drop(seeder);

    let clients = backend.clients();
    let reconciler = InventoryReconciler::new(
        clients.inventory_items.clone(),
        clients.inventory_levels.clone(),
        config.stocked_quantity,
    );
    let report = reconciler.reconcile(location).await.unwrap();
    assert_eq!(report.known_items, 6);
    assert_eq!(report.already_stocked, 6);
    assert_eq!(report.created, 0);

    let levels = clients
        .inventory_levels
        .list(InventoryLevelFilter::at_location(location))
        .await
        .unwrap();
    assert_eq!(levels.len(), 6);

    drop(reconciler);
    drop(clients);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_existing_level_is_not_duplicated() {
    let backend = bootstrapped().await;
    let clients = backend.clients();
    let targets = {
        let seeder = Seeder::new(clients.clone(), &SeedConfig::default());
        seeder.resolve_targets().await.unwrap()
    };

    // Three single-variant products give items i1, i2, i3.
    let catalog = CatalogDefinition {
        categories: vec![category("Consumabile")],
        products: vec![
            product("manusi", "Consumabile", "Marime", &["M"]),
            product("masti", "Consumabile", "Culoare", &["Verde"]),
            product("pahare", "Consumabile", "Volum", &["200ml"]),
        ],
    };
    let loader = catalog_seed::seed::CatalogLoader::new(
        clients.categories.clone(),
        clients.products.clone(),
    );
    loader.load(catalog, &targets).await.unwrap();

    let items = clients
        .inventory_items
        .list(InventoryItemFilter::default())
        .await
        .unwrap();
    assert_eq!(items.len(), 3);

    // i1 is already stocked, with a different quantity.
    clients
        .inventory_levels
        .create_levels(vec![InventoryLevelCreate {
            inventory_item_id: items[0].id,
            location_id: targets.location_id,
            stocked_quantity: 7,
        }])
        .await
        .unwrap();

    let reconciler = InventoryReconciler::new(
        clients.inventory_items.clone(),
        clients.inventory_levels.clone(),
        500,
    );
    let report = reconciler.reconcile(targets.location_id).await.unwrap();
    assert_eq!(report.created, 2);

    let levels = clients
        .inventory_levels
        .list(InventoryLevelFilter::at_location(targets.location_id))
        .await
        .unwrap();
    assert_eq!(levels.len(), 3);
    let first = levels
        .iter()
        .find(|level| level.inventory_item_id == items[0].id)
        .unwrap();
    assert_eq!(first.stocked_quantity, 7);

    drop((loader, reconciler, clients));
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_sku_aborts_the_run() {
    let backend = bootstrapped().await;
    let mut catalog = small_catalog();
    catalog.products[2].variants[0].sku = "KIT-SONDE-STANDARD".to_string();

    let seeder = Seeder::new(backend.clients(), &SeedConfig::default());
    let result = seeder.run(catalog).await;
    drop(seeder);

    assert_eq!(
        result,
        Err(SeedError::Product(ProductError::AlreadyExists(
            "sku:KIT-SONDE-STANDARD".to_string()
        )))
    );

    let clients = backend.clients();
    assert!(clients
        .inventory_items
        .list(InventoryItemFilter::default())
        .await
        .unwrap()
        .is_empty());
    assert!(clients.products.list(Default::default()).await.unwrap().is_empty());

    drop(clients);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_option_combination_aborts_the_run() {
    let backend = bootstrapped().await;
    let mut catalog = small_catalog();
    let masti = &mut catalog.products[1];
    masti.variants[1].options = masti.variants[0].options.clone();

    let seeder = Seeder::new(backend.clients(), &SeedConfig::default());
    let result = seeder.run(catalog).await;
    drop(seeder);

    match result {
        Err(SeedError::Product(ProductError::InvalidProduct { handle, reason })) => {
            assert_eq!(handle, "masti");
            assert!(reason.contains("repeats option combination"), "{}", reason);
        }
        other => panic!("expected InvalidProduct, got {:?}", other),
    }

    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_taken_sku_leaves_no_inventory_behind() {
    let backend = bootstrapped().await;
    let clients = backend.clients();
    clients
        .inventory_items
        .create_items(vec![InventoryItemCreate {
            sku: "MASTI-ALBASTRU".to_string(),
            title: "Albastru".to_string(),
        }])
        .await
        .unwrap();

    let seeder = Seeder::new(clients.clone(), &SeedConfig::default());
    let result = seeder.run(small_catalog()).await;
    drop(seeder);

    assert_eq!(
        result,
        Err(SeedError::Product(ProductError::AlreadyExists(
            "sku:MASTI-ALBASTRU".to_string()
        )))
    );
    let skus: Vec<String> = clients
        .inventory_items
        .list(InventoryItemFilter::default())
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.sku)
        .collect();
    assert_eq!(skus, vec!["MASTI-ALBASTRU".to_string()]);
    assert!(clients.products.list(Default::default()).await.unwrap().is_empty());

    drop(clients);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_names_with_surrounding_blanks_resolve() {
    let backend = bootstrapped().await;
    let config = SeedConfig {
        sales_channel_name: "Default Sales Channel ".to_string(),
        ..SeedConfig::default()
    };
    let catalog = CatalogDefinition {
        categories: vec![category("Consumabile ")],
        products: vec![product("masti", "Consumabile ", "Culoare", &["Albastru"])],
    };

    let seeder = Seeder::new(backend.clients(), &config);
    let summary = seeder.run(catalog).await.unwrap();
    drop(seeder);

    assert_eq!(summary.categories, 1);
    assert_eq!(summary.products, 1);
    assert_eq!(summary.inventory_levels, 1);

    let clients = backend.clients();
    let products = clients.products.list(Default::default()).await.unwrap();
    let categories = clients.categories.list(Default::default()).await.unwrap();
    assert_eq!(categories[0].name, "Consumabile");
    assert_eq!(products[0].category_ids, vec![categories[0].id]);

    drop(clients);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_category_aborts_before_products() {
    let backend = bootstrapped().await;
    let mut catalog = small_catalog();
    catalog.products[1].categories = vec!["Ortodontie".to_string()];

    let seeder = Seeder::new(backend.clients(), &SeedConfig::default());
    let result = seeder.run(catalog).await;
    drop(seeder);

    assert_eq!(
        result,
        Err(SeedError::UnknownCategory {
            product: "masti".to_string(),
            category: "Ortodontie".to_string(),
        })
    );

    let clients = backend.clients();
    assert!(clients.products.list(Default::default()).await.unwrap().is_empty());
    drop(clients);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rerunning_the_catalog_reports_existing_categories() {
    let backend = bootstrapped().await;
    let seeder = Seeder::new(backend.clients(), &SeedConfig::default());

    seeder.run(small_catalog()).await.unwrap();
    let second = seeder.run(small_catalog()).await;
    drop(seeder);

    assert_eq!(
        second,
        Err(SeedError::Category(CategoryError::AlreadyExists(
            "handle:instrumente-dentare".to_string()
        )))
    );

    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_targets_abort_the_run() {
    // No bootstrap: the backend is empty.
    let backend = StoreBackend::new(8);
    let seeder = Seeder::new(backend.clients(), &SeedConfig::default());

    let result = seeder.run(small_catalog()).await;
    drop(seeder);

    assert!(matches!(result, Err(SeedError::MissingTarget { .. })));
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_sales_channel_is_a_missing_target() {
    let backend = bootstrapped().await;
    let config = SeedConfig {
        sales_channel_name: "Wholesale".to_string(),
        ..SeedConfig::default()
    };
    let seeder = Seeder::new(backend.clients(), &config);

    let result = seeder.resolve_targets().await;
    drop(seeder);

    assert_eq!(
        result,
        Err(SeedError::MissingTarget {
            kind: "sales channel",
            selector: "Wholesale".to_string(),
        })
    );
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dental_catalog_seeds() {
    let backend = bootstrapped().await;
    let seeder = Seeder::new(backend.clients(), &SeedConfig::default());

    let summary = seeder.run(dental::catalog().unwrap()).await.unwrap();
    drop(seeder);

    assert_eq!(
        summary,
        SeedSummary {
            categories: 6,
            products: 16,
            variants: 49,
            inventory_levels: 49,
        }
    );
    backend.shutdown().await.unwrap();
}
