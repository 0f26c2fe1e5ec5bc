//! Product listing: filter, sort and render.

use askama::Template;

use docushop_core::{CategoryFilter, Product, SortOrder};

/// An ordered, filterable list of products for one grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListing {
    products: Vec<Product>,
}

impl ProductListing {
    /// Wrap products in API order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Keep only products passing `filter`.
    #[must_use]
    pub fn filtered(mut self, filter: &CategoryFilter) -> Self {
        self.products.retain(|product| filter.matches(product));
        self
    }

    /// Reorder by `order`.
    #[must_use]
    pub fn sorted(mut self, order: SortOrder) -> Self {
        order.apply(&mut self.products);
        self
    }

    /// The products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if nothing is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Result counter text, e.g. `"1-12 out of 12 results"`.
    #[must_use]
    pub fn result_count_label(&self) -> String {
        match self.products.len() {
            0 => "0 results".to_string(),
            1 => "1 out of 1 result".to_string(),
            n => format!("1-{n} out of {n} results"),
        }
    }

    /// Grid template for this listing.
    #[must_use]
    pub fn template(&self) -> ProductGridTemplate {
        ProductGridTemplate {
            cards: self.products.iter().map(ProductCardView::from).collect(),
            result_count: self.result_count_label(),
        }
    }
}

/// Product card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quick_review: String,
    pub description: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone().unwrap_or_default(),
            quick_review: product.quick_review.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

/// Product grid fragment.
#[derive(Template)]
#[template(path = "catalog/product_grid.html")]
pub struct ProductGridTemplate {
    pub cards: Vec<ProductCardView>,
    pub result_count: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use docushop_core::{Price, ProductId};

    use super::*;

    fn product(id: &str, category: &str, cents: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: Some(category.to_string()),
            price: Price::from_cents(cents),
            original_price: None,
            discount: None,
            rating: None,
            reviews: None,
            image: Some(format!("{id}.jpg")),
            description: None,
            quick_review: Some("Solid value".to_string()),
        }
    }

    fn sample() -> ProductListing {
        ProductListing::new(vec![
            product("lamp", "Home Office", 4500),
            product("pen", "Stationery", 300),
            product("desk", "Home Office", 19900),
        ])
    }

    #[test]
    fn test_filter_then_sort() {
        let listing = sample()
            .filtered(&CategoryFilter::parse("home-office"))
            .sorted(SortOrder::PriceDesc);

        let ids: Vec<&str> = listing.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["desk", "lamp"]);
        assert_eq!(listing.result_count_label(), "1-2 out of 2 results");
    }

    #[test]
    fn test_result_count_label_edges() {
        assert_eq!(ProductListing::default().result_count_label(), "0 results");
        let one = sample().filtered(&CategoryFilter::parse("stationery"));
        assert_eq!(one.result_count_label(), "1 out of 1 result");
    }

    #[test]
    fn test_grid_renders_cards() {
        let html = sample().template().render().unwrap();
        assert_eq!(html.matches("class=\"product-card\"").count(), 3);
        assert!(html.contains("data-product-id=\"pen\""));
        assert!(html.contains("$199.00"));
        assert!(html.contains("1-3 out of 3 results"));
    }
}
