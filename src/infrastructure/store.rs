//! 存储抽象
//!
//! 资源处理器只依赖 `ProductStore`，具体后端（内存 / Postgres）在启动时注入。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app::product::model::Product;

/// 存储层错误，对处理器而言是不透明的协作方失败
#[derive(Debug, Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 全部记录，按存储自身的顺序
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// `id` 为空时分配新的 id，否则覆盖该 id 上的记录
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// 后端名称，用于健康检查和日志
    fn backend(&self) -> &'static str;
}

pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// 内存存储，保持插入顺序
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有记录初始化；空 id 的记录会被分配新 id
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|mut p| {
                if p.id.is_empty() {
                    p.id = generate_id();
                }
                p
            })
            .collect();

        Self {
            products: RwLock::new(products),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;

        if product.id.is_empty() {
            product.id = generate_id();
        }

        match products.iter().position(|p| p.id == product.id) {
            Some(index) => products[index] = product.clone(),
            None => products.push(product.clone()),
        }

        Ok(product)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.products.write().await.retain(|p| p.id != id);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
