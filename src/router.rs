//! 路由组装

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::product::handler::{
    create_product, delete_product, get_product, health_check, list_products, search_products,
    update_product,
};
use crate::app::product::openapi::openapi_json;
use crate::app::product::service::ProductService;
use crate::app::product::validation::PriceRule;
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::store::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, price_rule: PriceRule) -> Self {
        Self {
            product_service: ProductService::new(store, price_rule),
        }
    }
}

/// 创建路由
pub fn create_routes(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/products", get(list_products).post(create_product))
        .route("/products/search", get(search_products))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
