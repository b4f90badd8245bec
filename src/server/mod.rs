//! HTTP server: shared state, route table, and the fluent builder

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;

use std::sync::Arc;

use crate::catalog::store::CatalogStore;
use crate::config::Config;
use crate::orders::store::OrderStore;

/// Application state shared across handlers
///
/// Stores are injected as trait objects so a persistence backend can be
/// swapped in without touching route logic.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub orders: Arc<dyn OrderStore>,
    pub config: Arc<Config>,
}
