//! OpenAPI 文档

use axum::response::Json;
use utoipa::OpenApi;

use super::handler;
use super::model::{Product, ProductPayload};
use crate::core::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product service", description = "Product CRUD and search API"),
    paths(
        handler::list_products,
        handler::search_products,
        handler::get_product,
        handler::create_product,
        handler::update_product,
        handler::delete_product
    ),
    components(schemas(Product, ProductPayload, ErrorResponse)),
    tags((name = "products", description = "Product management"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
