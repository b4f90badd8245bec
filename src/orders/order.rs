//! Order model and submission input

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::coerce;
use crate::core::error::ApiError;

/// Status every order is created with
///
/// There is no transition logic; orders stay pending forever.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// One line of a submitted order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Shipping address as the checkout form nests it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Customer contact details attached to an order
///
/// Only the presence of the object is validated; the fields inside are
/// echoed back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// An immutable record of a submitted purchase intent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential id assigned by the order store
    pub id: String,
    pub items: Vec<OrderItem>,
    /// Expected (but not server-verified) to equal the line sum plus tax
    pub total_amount: Decimal,
    pub customer_info: CustomerInfo,
    /// Always `"pending"`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated order submission, ready for the store to stamp and append
///
/// Also the exact payload shape the checkout flow posts to
/// `POST /api/orders`; note there are no payment fields here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub customer_info: CustomerInfo,
}

/// Incoming body for `POST /api/orders`
///
/// Fields are optional at the serde level so presence failures surface as a
/// 400 validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub total_amount: Option<Value>,
    #[serde(default)]
    pub customer_info: Option<CustomerInfo>,
}

impl CreateOrderRequest {
    /// Validate required order information
    ///
    /// Items must be a non-empty list; totalAmount and customerInfo must be
    /// present. totalAmount tolerates a numeric string.
    pub fn validate(self) -> Result<OrderSubmission, ApiError> {
        let items = self
            .items
            .filter(|items| !items.is_empty())
            .ok_or_else(|| ApiError::Validation("Order must contain items".to_string()))?;

        let total_amount = self
            .total_amount
            .as_ref()
            .and_then(coerce::decimal)
            .ok_or_else(|| {
                ApiError::Validation("Missing required order information".to_string())
            })?;
        let customer_info = self.customer_info.ok_or_else(|| {
            ApiError::Validation("Missing required order information".to_string())
        })?;

        Ok(OrderSubmission {
            items,
            total_amount,
            customer_info,
        })
    }
}
