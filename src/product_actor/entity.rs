//! ActorEntity trait implementation for the Product domain type.
//!
//! Payload checks (option matrix, SKUs, prices) run in `from_create_params`;
//! references to other actors are checked in `validate`; the inventory items
//! behind the variants are created in `on_create`.

use super::error::ProductError;
use super::ProductContext;
use crate::clients::ActorClient;
use crate::model::{
    InventoryItemCreate, InventoryItemFilter, Price, Product, ProductCreate, ProductFilter,
    ProductId, ProductOption, ProductVariant, VariantCreate, VariantId,
};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::collections::{BTreeMap, HashSet};
use std::convert::Infallible;
use tracing::debug;

fn check_options(handle: &str, options: &[ProductOption]) -> Result<(), ProductError> {
    let mut titles = HashSet::new();
    for option in options {
        if option.title.trim().is_empty() {
            return Err(ProductError::invalid(handle, "option title is empty"));
        }
        if !titles.insert(option.title.as_str()) {
            return Err(ProductError::invalid(
                handle,
                format!("duplicate option {:?}", option.title),
            ));
        }
        if option.values.is_empty() {
            return Err(ProductError::invalid(
                handle,
                format!("option {:?} has no values", option.title),
            ));
        }
        let mut values = HashSet::new();
        if let Some(dup) = option.values.iter().find(|v| !values.insert(v.as_str())) {
            return Err(ProductError::invalid(
                handle,
                format!("option {:?} lists {:?} twice", option.title, dup),
            ));
        }
    }
    Ok(())
}

/// Each variant must pick exactly one allowed value per option axis.
fn check_selection(
    handle: &str,
    options: &[ProductOption],
    variant: &VariantCreate,
) -> Result<(), ProductError> {
    if variant.options.len() != options.len() {
        return Err(ProductError::invalid(
            handle,
            format!(
                "variant {} selects {} options, product has {}",
                variant.sku,
                variant.options.len(),
                options.len()
            ),
        ));
    }
    for option in options {
        match variant.options.get(&option.title) {
            Some(value) if option.values.contains(value) => {}
            Some(value) => {
                return Err(ProductError::invalid(
                    handle,
                    format!(
                        "variant {} uses {:?} which is not a value of {:?}",
                        variant.sku, value, option.title
                    ),
                ))
            }
            None => {
                return Err(ProductError::invalid(
                    handle,
                    format!("variant {} has no value for {:?}", variant.sku, option.title),
                ))
            }
        }
    }
    Ok(())
}

fn normalize_prices(
    handle: &str,
    sku: &str,
    prices: Vec<Price>,
) -> Result<Vec<Price>, ProductError> {
    let mut currencies = HashSet::new();
    prices
        .into_iter()
        .map(|price| {
            let currency_code = price.currency_code.trim().to_ascii_lowercase();
            if currency_code.len() != 3 || !currency_code.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ProductError::invalid(
                    handle,
                    format!("variant {} has invalid currency {:?}", sku, price.currency_code),
                ));
            }
            if !currencies.insert(currency_code.clone()) {
                return Err(ProductError::invalid(
                    handle,
                    format!("variant {} is priced twice in {}", sku, currency_code),
                ));
            }
            Ok(Price::new(price.amount, currency_code))
        })
        .collect()
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Filter = ProductFilter;
    type Context = ProductContext;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product after checking the payload on its own.
    ///
    /// # Errors
    /// [`ProductError::InvalidProduct`] when the title or handle is empty, the option
    /// matrix is inconsistent, a SKU is blank, two variants share an option combination,
    /// or a price has a malformed or repeated currency.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let handle = params.handle.trim().to_string();
        if handle.is_empty() {
            return Err(ProductError::invalid(&params.title, "handle is empty"));
        }
        if params.title.trim().is_empty() {
            return Err(ProductError::invalid(&handle, "title is empty"));
        }
        check_options(&handle, &params.options)?;
        if params.variants.is_empty() {
            return Err(ProductError::invalid(&handle, "product has no variants"));
        }

        let mut combinations: HashSet<BTreeMap<String, String>> = HashSet::new();
        let mut variants = Vec::with_capacity(params.variants.len());
        for (index, variant) in params.variants.into_iter().enumerate() {
            let sku = variant.sku.trim().to_string();
            if sku.is_empty() {
                return Err(ProductError::invalid(
                    &handle,
                    format!("variant {:?} has no SKU", variant.title),
                ));
            }
            check_selection(&handle, &params.options, &variant)?;
            if !combinations.insert(variant.options.clone()) {
                return Err(ProductError::invalid(
                    &handle,
                    format!("variant {} repeats option combination {:?}", sku, variant.options),
                ));
            }
            let prices = normalize_prices(&handle, &sku, variant.prices)?;
            variants.push(ProductVariant {
                id: VariantId {
                    product: id.0,
                    index: index as u32,
                },
                title: variant.title,
                sku,
                options: variant.options,
                prices,
                inventory_item_id: None,
            });
        }

        Ok(Self {
            id,
            title: params.title,
            handle,
            description: params.description,
            weight: params.weight,
            status: params.status,
            shipping_profile_id: params.shipping_profile_id,
            images: params.images,
            options: params.options,
            variants,
            category_ids: params.category_ids,
            sales_channel_ids: params.sales_channel_ids,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.handle.as_ref().map_or(true, |handle| handle == &self.handle)
    }

    fn unique_keys(&self) -> Vec<String> {
        std::iter::once(format!("handle:{}", self.handle))
            .chain(self.variants.iter().map(|v| format!("sku:{}", v.sku)))
            .collect()
    }

    /// Checks that every category, sales channel and the shipping profile exist, and
    /// that no variant SKU already has an inventory item.
    ///
    /// The whole batch is validated before any `on_create` runs, so a taken SKU
    /// rejects the batch before any inventory item is created for it.
    async fn validate(&self, ctx: &ProductContext) -> Result<(), Self::Error> {
        let missing = |kind: &'static str, id: String| ProductError::MissingReference {
            handle: self.handle.clone(),
            kind,
            id,
        };

        for category_id in &self.category_ids {
            let found = ctx
                .categories
                .get(*category_id)
                .await
                .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
            if found.is_none() {
                return Err(missing("category", category_id.to_string()));
            }
        }
        for channel_id in &self.sales_channel_ids {
            let found = ctx
                .sales_channels
                .get(*channel_id)
                .await
                .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
            if found.is_none() {
                return Err(missing("sales channel", channel_id.to_string()));
            }
        }
        let profile = ctx
            .shipping_profiles
            .get(self.shipping_profile_id)
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
        if profile.is_none() {
            return Err(missing("shipping profile", self.shipping_profile_id.to_string()));
        }
        for variant in &self.variants {
            let filter = InventoryItemFilter {
                sku: Some(variant.sku.clone()),
            };
            let taken = ctx
                .inventory_items
                .list(filter)
                .await
                .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
            if !taken.is_empty() {
                return Err(ProductError::AlreadyExists(format!("sku:{}", variant.sku)));
            }
        }
        Ok(())
    }

    /// Creates one inventory item per variant and links it to the variant.
    async fn on_create(&mut self, ctx: &ProductContext) -> Result<(), Self::Error> {
        let payloads = self
            .variants
            .iter()
            .map(|v| InventoryItemCreate {
                sku: v.sku.clone(),
                title: v.title.clone(),
            })
            .collect();
        let items = ctx
            .inventory_items
            .create_items(payloads)
            .await
            .map_err(|e| ProductError::InventoryError(e.to_string()))?;

        for (variant, item) in self.variants.iter_mut().zip(items) {
            debug!(sku = %variant.sku, item_id = %item.id, "Linked inventory item");
            variant.inventory_item_id = Some(item.id);
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &ProductContext,
    ) -> Result<(), Self::Error> {
        match update {}
    }
}
