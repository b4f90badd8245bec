//! Orders: immutable records of submitted purchase intents
//!
//! Orders are appended on submission and looked up by id; no mutation,
//! deletion, or status transition logic exists.

pub mod handlers;
pub mod order;
pub mod store;

pub use order::{Address, CreateOrderRequest, CustomerInfo, Order, OrderItem, OrderSubmission};
pub use store::{InMemoryOrders, OrderStore};
