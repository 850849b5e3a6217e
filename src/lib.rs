//! # Product 微服务
//!
//! 提供 Product 资源的 CRUD 与条件查询：
//! - app: 资源处理器（校验、过滤、HTTP 处理函数）
//! - core: 错误映射、提取器、中间件
//! - infrastructure: 配置、日志、存储后端

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use crate::app::product::model::{Product, ProductDraft, ProductFilter, ProductPayload};
pub use crate::app::product::service::ProductService;
pub use crate::app::product::validation::PriceRule;
pub use crate::core::error::CoreError;
pub use crate::infrastructure::config::Config;
pub use crate::infrastructure::store::{MemoryStore, ProductStore, StoreError};
pub use crate::router::{create_routes, AppState};
