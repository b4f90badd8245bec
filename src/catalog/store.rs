//! Catalog store trait and in-memory implementation
//!
//! Route logic only ever sees the [`CatalogStore`] trait, so a real
//! persistence backend can be substituted without touching handlers.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexSet;
use std::sync::{Arc, RwLock};

use crate::catalog::product::{NewProduct, Product};
use crate::core::IdSequence;

/// Optional predicates applied conjunctively over the product list
///
/// Category is a case-insensitive exact match, search a case-insensitive
/// substring match against name or description. `featured` carries the raw
/// query string: any value other than `"true"` selects non-featured
/// products, matching the original API's `featured === 'true'` comparison.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    /// True when every supplied predicate holds for `product`
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(featured) = &self.featured {
            if product.featured != (featured.as_str() == "true") {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let term = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Read and append access to the product list
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List products matching `filter`, in insertion order
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// Fetch a single product by id
    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// Assign an id, stamp the creation time, and append
    async fn create(&self, new: NewProduct) -> Result<Product>;

    /// Distinct categories in first-seen order
    async fn categories(&self) -> Result<Vec<String>>;
}

/// In-memory catalog backed by a plain product list
///
/// All data resets on process restart. Ids come from an atomic sequence, so
/// concurrent creations cannot collide.
#[derive(Clone)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<Vec<Product>>>,
    ids: Arc<IdSequence>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            ids: Arc::new(IdSequence::new()),
        }
    }

    /// Create a catalog preloaded with `products`
    ///
    /// The id sequence continues past the seed so fresh ids stay unique.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next = products.len() as u64 + 1;
        Self {
            products: Arc::new(RwLock::new(products)),
            ids: Arc::new(IdSequence::starting_at(next)),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new: NewProduct) -> Result<Product> {
        let product = Product {
            id: self.ids.next_id(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            image_url: new.image_url,
            stock: new.stock,
            featured: false,
            created_at: Utc::now(),
        };

        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        products.push(product.clone());

        Ok(product)
    }

    async fn categories(&self) -> Result<Vec<String>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let distinct: IndexSet<String> =
            products.iter().map(|p| p.category.clone()).collect();
        Ok(distinct.into_iter().collect())
    }
}
