//! 请求提取器
//!
//! 包装 axum 自带的 `Json` / `Query` / `Path`，把解析失败统一转换为
//! `CoreError::BadRequest`，与字段校验失败使用同一种响应结构。

use axum::extract::{FromRequest, FromRequestParts, Path, Query};
use axum::Json;

use super::error::CoreError;

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(CoreError))]
pub struct ValidJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(CoreError))]
pub struct ValidQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(CoreError))]
pub struct ValidPath<T>(pub T);
