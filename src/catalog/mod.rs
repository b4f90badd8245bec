//! Catalog: the collection of purchasable products
//!
//! Read access is filter/search over the full list; write access is
//! append-only creation. Products are never mutated or deleted.

pub mod handlers;
pub mod product;
pub mod seed;
pub mod store;

pub use product::{CreateProductRequest, NewProduct, Product};
pub use store::{CatalogStore, InMemoryCatalog, ProductFilter};
