//! 路由模块

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// 创建 SQL 学习服务路由
///
/// 已知路由上的非法方法返回带 ERROR 封装的 405（axum 默认的 405 没有
/// 响应体）；OPTIONS 短路为 200 空响应。
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sql/health",
            get(handlers::health)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/sql/query",
            post(handlers::execute_query)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
}
