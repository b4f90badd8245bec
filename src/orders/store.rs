//! Order store trait and in-memory implementation

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::core::IdSequence;
use crate::orders::order::{Order, OrderSubmission, ORDER_STATUS_PENDING};

/// Append and lookup access to submitted orders
///
/// Note that appending an order does not touch product stock anywhere;
/// overselling is possible by design of the demo.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Assign an id, fix status to pending, stamp timestamps, and append
    async fn append(&self, submission: OrderSubmission) -> Result<Order>;

    /// Fetch a single order by id
    async fn get(&self, id: &str) -> Result<Option<Order>>;

    /// List every submitted order in submission order
    async fn list(&self) -> Result<Vec<Order>>;
}

/// In-memory order list
///
/// All data resets on process restart. Ids come from an atomic sequence.
#[derive(Clone)]
pub struct InMemoryOrders {
    orders: Arc<RwLock<Vec<Order>>>,
    ids: Arc<IdSequence>,
}

impl InMemoryOrders {
    /// Create an empty order store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            ids: Arc::new(IdSequence::new()),
        }
    }
}

impl Default for InMemoryOrders {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrders {
    async fn append(&self, submission: OrderSubmission) -> Result<Order> {
        let now = Utc::now();
        let order = Order {
            id: self.ids.next_id(),
            items: submission.items,
            total_amount: submission.total_amount,
            customer_info: submission.customer_info,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        orders.push(order.clone());

        Ok(order)
    }

    async fn get(&self, id: &str) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.clone())
    }
}
