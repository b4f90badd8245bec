//! HTTP handlers for catalog routes

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::product::{CreateProductRequest, Product};
use crate::catalog::store::ProductFilter;
use crate::core::{ApiError, ApiJson};
use crate::server::AppState;

/// Query string for `GET /api/products`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub search: Option<String>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        ProductFilter {
            category: query.category,
            featured: query.featured,
            search: query.search,
        }
    }
}

/// Response for the product list endpoint
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Response for the categories endpoint
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// GET /api/products?category&featured&search
///
/// Applies the supplied predicates conjunctively and returns the filtered
/// list with its count. No pagination.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = state.catalog.list(&query.into()).await?;
    let total = products.len();
    Ok(Json(ProductListResponse { products, total }))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let new = request.validate()?;
    let product = state.catalog.create(new).await?;
    tracing::info!(id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.catalog.categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}
