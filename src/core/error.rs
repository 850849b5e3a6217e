//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::app::product::validation::ValidationErrors;
use crate::infrastructure::store::StoreError;

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    /// 字段校验失败
    #[error("{0}")]
    Validation(ValidationErrors),

    /// 请求体、查询参数或路径参数无法解析
    #[error("{0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 400 / 500 错误响应结构
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    #[schema(example = 400)]
    pub status_code: u16,
    /// First failing rule, or the parse failure
    #[schema(example = "Name is mandatory")]
    pub message: String,
    /// Every validation failure in rule order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ErrorResponse {
                    errors: errors.messages(),
                    ..ErrorResponse::new(status, errors.first().message())
                };
                (status, Json(body)).into_response()
            }
            CoreError::BadRequest(message) => {
                let status = StatusCode::BAD_REQUEST;
                (status, Json(ErrorResponse::new(status, message))).into_response()
            }
            CoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CoreError::Store(e) => {
                error!("Store error: {}", e);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, Json(ErrorResponse::new(status, "Internal server error"))).into_response()
            }
        }
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors)
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn test_bad_request_shape() {
        let response = CoreError::BadRequest("Failed to parse the request body as JSON".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "status_code": 400,
                "message": "Failed to parse the request body as JSON"
            })
        );
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = CoreError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_hides_cause() {
        let response = CoreError::from(StoreError::Unavailable("connection refused".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body.status_code, 500);
        assert!(!body.message.contains("connection refused"));
    }
}
