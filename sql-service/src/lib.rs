//! SQL 学习服务
//!
//! 面向教学的 SQL 执行服务，提供：
//! - 任意 SQL 语句的执行与结果规范化（读/写两条路径）
//! - 健康检查与示例查询目录
//! - 启动时的教学数据库初始化

pub mod bootstrap;
pub mod catalog;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use common::middleware::request_id::request_id_middleware;
use state::AppState;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SQL 学习服务 API",
        version = "0.1.0",
        description = "SQL 执行与结果规范化服务"
    ),
    paths(
        handlers::execute_query,
        handlers::health,
    ),
    components(schemas(
        common::models::QueryRequest,
        common::models::QueryResult,
        common::models::HealthResult,
        common::models::NamedQuery,
        common::models::QueryCategory,
        common::response::ErrorData,
    )),
    tags(
        (name = "query", description = "SQL 执行端点"),
        (name = "health", description = "健康检查端点")
    )
)]
pub struct ApiDoc;

/// 组装完整的服务路由
///
/// 每个响应都带上 CORS 头与 JSON 内容类型；中间件栈与压缩、请求 ID、
/// 访问日志一起挂在路由之上。
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
