//! Product 业务服务
//!
//! 与 HTTP 无关的资源处理逻辑：校验、过滤，以及对存储的委托。
//! 并发控制完全交给存储层；Update 的读-改-写不是原子的。

use std::sync::Arc;

use tracing::{debug, info};

use super::model::{Product, ProductFilter, ProductPayload};
use super::validation::{validate, PriceRule};
use crate::core::error::CoreError;
use crate::infrastructure::store::ProductStore;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    price_rule: PriceRule,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, price_rule: PriceRule) -> Self {
        Self { store, price_rule }
    }

    pub fn price_rule(&self) -> PriceRule {
        self.price_rule
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.store.find_all().await?)
    }

    /// 按条件过滤全部记录，保持存储的顺序
    pub async fn list_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>, CoreError> {
        let products = self.store.find_all().await?;
        if filter.is_empty() {
            return Ok(products);
        }

        let total = products.len();
        let matched: Vec<Product> = products.into_iter().filter(|p| filter.matches(p)).collect();
        debug!("Filter {:?} matched {} of {} products", filter, matched.len(), total);

        Ok(matched)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Product, CoreError> {
        self.store.find_by_id(id).await?.ok_or(CoreError::NotFound)
    }

    pub async fn create(&self, payload: ProductPayload) -> Result<Product, CoreError> {
        let draft = validate(&payload, self.price_rule)?;
        let product = self.store.save(Product::from_draft(draft)).await?;

        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 先校验再查找；记录的 id 保持不变
    pub async fn update(&self, id: &str, payload: ProductPayload) -> Result<Product, CoreError> {
        let draft = validate(&payload, self.price_rule)?;

        let mut product = self.get_by_id(id).await?;
        product.apply(draft);
        let product = self.store.save(product).await?;

        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let product = self.get_by_id(id).await?;
        self.store.delete_by_id(&product.id).await?;

        info!("Deleted product: {}", product.id);
        Ok(())
    }
}
