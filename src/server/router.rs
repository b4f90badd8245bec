//! Route table for the storefront API

use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::catalog::handlers::{create_product, get_product, list_categories, list_products};
use crate::orders::handlers::{get_order, list_orders, submit_order};

/// Version string reported by the health endpoint
pub const API_VERSION: &str = "1.0.0";

/// Build the full API router
///
/// - GET  /api/health
/// - GET  /api/products, POST /api/products, GET /api/products/{id}
/// - GET  /api/categories
/// - GET  /api/orders, POST /api/orders, GET /api/orders/{id}
///
/// Unmatched routes answer 404 with a generic JSON error body.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/categories", get(list_categories))
        .route("/api/orders", get(list_orders).post(submit_order))
        .route("/api/orders/{id}", get(get_order))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origin = state
        .config
        .frontend_url
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// GET /api/health — liveness probe
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": API_VERSION,
        "environment": state.config.environment.as_str(),
    }))
}

/// Generic 404 for anything outside the route table
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API route not found" })),
    )
}
