//! Cache types for product API responses.

/// Cache key for product listings.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// Every product.
    AllProducts,
    /// Products in one category.
    Category(String),
}

impl CacheKey {
    pub fn for_category(category: Option<&str>) -> Self {
        category.map_or(Self::AllProducts, |c| Self::Category(c.to_string()))
    }
}
