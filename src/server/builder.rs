//! ServerBuilder for fluent API to assemble and serve the storefront

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::router::build_router;
use super::AppState;
use crate::catalog::seed;
use crate::catalog::store::{CatalogStore, InMemoryCatalog};
use crate::config::Config;
use crate::orders::store::{InMemoryOrders, OrderStore};

/// Builder wiring stores and configuration into a ready-to-serve router
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(Config::from_env())
///     .with_seed_catalog()
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    catalog: Option<Arc<dyn CatalogStore>>,
    orders: Option<Arc<dyn OrderStore>>,
    config: Config,
    seed_catalog: bool,
}

impl ServerBuilder {
    /// Create a builder with default configuration and no stores
    pub fn new() -> Self {
        Self {
            catalog: None,
            orders: None,
            config: Config::default(),
            seed_catalog: false,
        }
    }

    /// Set the server configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Inject a catalog store
    ///
    /// Without this, an empty in-memory catalog is used (seeded when
    /// [`with_seed_catalog`](Self::with_seed_catalog) is set).
    pub fn with_catalog(mut self, catalog: impl CatalogStore + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Inject an order store
    pub fn with_orders(mut self, orders: impl OrderStore + 'static) -> Self {
        self.orders = Some(Arc::new(orders));
        self
    }

    /// Preload the default in-memory catalog with the six demo products
    ///
    /// No effect when a catalog store was injected explicitly.
    pub fn with_seed_catalog(mut self) -> Self {
        self.seed_catalog = true;
        self
    }

    /// Build the final router
    pub fn build(self) -> Router {
        let catalog = self.catalog.unwrap_or_else(|| {
            if self.seed_catalog {
                Arc::new(InMemoryCatalog::with_products(seed::demo_products()))
            } else {
                Arc::new(InMemoryCatalog::new())
            }
        });
        let orders = self
            .orders
            .unwrap_or_else(|| Arc::new(InMemoryOrders::new()));

        build_router(AppState {
            catalog,
            orders,
            config: Arc::new(self.config),
        })
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `0.0.0.0` on the configured port and handles SIGTERM and
    /// Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.config.port);
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Storefront API listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
