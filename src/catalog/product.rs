//! Product model and creation input

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::coerce;
use crate::core::error::ApiError;

/// A purchasable catalog entry
///
/// Serialized in the camelCase wire shape (`imageUrl`, `createdAt`). Ids are
/// sequential decimal strings assigned by the catalog store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique sequential id
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative price, serialized as a JSON number
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    /// Units on hand; never decremented by order placement
    pub stock: u32,
    /// Flagged for homepage promotion
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Incoming body for `POST /api/products`
///
/// Every field is optional at the serde level so that presence can be
/// validated into a 400 rather than a deserialization failure. Price and
/// stock arrive as raw JSON values and go through lenient coercion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: Option<Value>,
}

/// A validated product creation, ready for the store to stamp and append
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
}

const MISSING_FIELDS: &str = "Missing required fields: name, price, category";

impl CreateProductRequest {
    /// Validate required fields and coerce the lenient ones
    ///
    /// Name, price, and category are required; empty strings count as
    /// missing. A negative price is rejected. Stock falls back to zero on
    /// non-numeric input, description and image URL get defaults.
    pub fn validate(self) -> Result<NewProduct, ApiError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ApiError::Validation(MISSING_FIELDS.to_string()))?;
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ApiError::Validation(MISSING_FIELDS.to_string()))?;
        let price = self
            .price
            .as_ref()
            .and_then(coerce::decimal)
            .ok_or_else(|| ApiError::Validation(MISSING_FIELDS.to_string()))?;
        if price.is_sign_negative() {
            return Err(ApiError::Validation(
                "Price must be non-negative".to_string(),
            ));
        }

        Ok(NewProduct {
            name,
            description: self.description.unwrap_or_default(),
            price,
            category,
            image_url: self
                .image_url
                .unwrap_or_else(|| "/images/placeholder.jpg".to_string()),
            stock: self.stock.as_ref().map(coerce::integer_or_zero).unwrap_or(0),
        })
    }
}
