//! # Storefront
//!
//! A teaching demo: a single-page e-commerce storefront backend exposing a
//! JSON REST API over in-memory product and order lists, plus the
//! client-side cart and checkout state it pairs with.
//!
//! ## Features
//!
//! - **Catalog**: filter/search reads and append-only creation
//! - **Orders**: validated submission, append and lookup-by-id
//! - **Cart**: session-memory aggregation with derived totals
//! - **Checkout**: required-field validation composing cart and shipping
//!   details into a submission (payment fields are collected and discarded)
//! - **Injected stores**: trait-object stores behind the routes, so a real
//!   persistence backend can replace the in-memory lists
//!
//! Deliberately out of scope: persistence, authentication, payment
//! processing, and inventory adjustment on order placement.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(Config::from_env())
//!         .with_seed_catalog()
//!         .serve()
//!         .await
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod core;
pub mod orders;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::cart::{Cart, CartLine, CheckoutError, CheckoutForm};
    pub use crate::catalog::{
        CatalogStore, CreateProductRequest, InMemoryCatalog, NewProduct, Product, ProductFilter,
    };
    pub use crate::orders::{
        Address, CreateOrderRequest, CustomerInfo, InMemoryOrders, Order, OrderItem, OrderStore,
        OrderSubmission,
    };

    // === Core ===
    pub use crate::core::{ApiError, ApiJson, IdSequence};

    // === Server ===
    pub use crate::config::{Config, Environment};
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
