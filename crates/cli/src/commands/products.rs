//! Catalog commands.

use docushop_core::{CategoryFilter, NewLineItem, SortOrder};
use docushop_storefront::catalog::{ProductApiClient, ProductListing};
use docushop_storefront::config::StorefrontConfig;

use super::{CliError, Result, open_store, print_html};

fn client(config: &StorefrontConfig) -> Result<ProductApiClient> {
    let catalog = config
        .require_catalog()
        .map_err(docushop_storefront::Error::from)?;
    Ok(ProductApiClient::new(catalog))
}

/// List products in `category`, ordered by `sort`.
///
/// # Errors
///
/// Returns an error if the product API is not configured or unreachable.
pub async fn list(
    config: &StorefrontConfig,
    category: &str,
    sort: SortOrder,
    html: bool,
) -> Result<()> {
    let products = client(config)?
        .fetch_products(None)
        .await
        .map_err(docushop_storefront::Error::from)?;

    let listing = ProductListing::new(products)
        .filtered(&CategoryFilter::parse(category))
        .sorted(sort);

    if html {
        return print_html(&listing.template());
    }

    for product in listing.products() {
        tracing::info!(
            id = %product.id,
            category = product.category.as_deref().unwrap_or("-"),
            "{} {}",
            product.name,
            product.price
        );
    }
    tracing::info!(sort = %sort, "{}", listing.result_count_label());
    Ok(())
}

/// Add a catalog product to the cart.
///
/// # Errors
///
/// Returns an error if the product API is unreachable or has no such product.
pub async fn add(
    config: &StorefrontConfig,
    id: &str,
    variant: String,
    qty: Option<i64>,
) -> Result<()> {
    let products = client(config)?
        .fetch_products(None)
        .await
        .map_err(docushop_storefront::Error::from)?;

    let product = products
        .iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| CliError::ProductNotFound(id.to_string()))?;

    let mut item = NewLineItem::from(product).with_variant(variant);
    if let Some(qty) = qty {
        item = item.with_qty(qty);
    }
    tracing::info!(id = %item.id, name = %item.name, "Adding to cart");
    open_store(config).add_item(item);
    Ok(())
}
