//! Product 资源：模型、校验、业务服务、HTTP 处理器与 OpenAPI 文档

pub mod handler;
pub mod model;
pub mod openapi;
pub mod service;
pub mod validation;
