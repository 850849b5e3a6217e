//! Product HTTP 处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::model::{Product, ProductFilter, ProductPayload};
use crate::core::error::{CoreError, ErrorResponse};
use crate::core::extract::{ValidJson, ValidPath, ValidQuery};
use crate::router::AppState;

/// 获取全部产品
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products in store order", body = [Product])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_all().await?;
    Ok(Json(products))
}

/// 按名称 / 描述子串与价格区间过滤
#[utoipa::path(
    get,
    path = "/products/search",
    tag = "products",
    params(
        ("q" = Option<String>, Query, description = "Substring of name or description, case-sensitive"),
        ("min_price" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("max_price" = Option<f64>, Query, description = "Inclusive upper price bound")
    ),
    responses(
        (status = 200, description = "Filtered products", body = [Product]),
        (status = 400, description = "Unparsable price parameter", body = ErrorResponse)
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    ValidQuery(filter): ValidQuery<ProductFilter>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_filtered(&filter).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get_by_id(&id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid or malformed product", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 覆盖 name / description / price，id 不变
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid or malformed product", body = ErrorResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
    ValidJson(payload): ValidJson<ProductPayload>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.update(&id, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "store": state.product_service.backend(),
        "price_rule": state.product_service.price_rule().to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
