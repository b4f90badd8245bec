//! HTTP handlers for order routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::core::{ApiError, ApiJson};
use crate::orders::order::{CreateOrderRequest, Order};
use crate::server::AppState;

/// Response for the order list endpoint
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

/// POST /api/orders
///
/// Validates the submission and appends it with status `"pending"`. Stock is
/// deliberately not decremented here.
pub async fn submit_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let submission = request.validate()?;
    let order = state.orders.append(submission).await?;
    tracing::info!(id = %order.id, total = %order.total_amount, "order submitted");
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(OrderListResponse { orders }))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    state
        .orders
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))
}
