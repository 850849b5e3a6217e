//! 核心中间件模块

use axum::{extract::Request, http::header::USER_AGENT, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
///
/// 5xx 以 warn 级别记录，其余以 info 级别记录。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, ?query, status, elapsed_ms, %user_agent, "request failed");
    } else {
        info!(%method, %path, ?query, status, elapsed_ms, %user_agent, "request handled");
    }

    response
}
