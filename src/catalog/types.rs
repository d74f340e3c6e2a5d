//! Catalog data: the products shown in the grid and the store header

use serde::Deserialize;

/// One product card's worth of data. Immutable once loaded.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Image URLs; only the first one is displayed
    #[serde(default)]
    pub images: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    /// Pre-formatted price text, never parsed
    pub price: String,
}

impl Product {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Store header shown above the tab strip
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StoreProfile {
    pub name: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Ordered, read-only list of products.
///
/// Built once at start-up and handed to the views by reference; there is no
/// way to add, remove or reorder products afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// A catalog document as stored on disk (YAML)
#[derive(Deserialize, Clone, Debug)]
pub struct Storefront {
    pub store: StoreProfile,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Storefront {
    pub fn into_parts(self) -> (StoreProfile, ProductCatalog) {
        (self.store, ProductCatalog::new(self.products))
    }
}
