//! Handler模块

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use common::errors::AppError;
use common::models::{HealthResult, QueryRequest, QueryResult};
use common::response::ApiResponse;

use crate::service::QueryService;
use crate::state::AppState;

/// 执行 SQL 语句
///
/// 请求体解析失败属于未处理错误（500）；`sql` 缺失或为空白返回固定
/// 信息的 400。
#[utoipa::path(
    post,
    path = "/sql/query",
    tag = "query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "执行成功，返回规范化表格结果", body = ApiResponse<QueryResult>),
        (status = 400, description = "SQL 缺失或为空白"),
        (status = 405, description = "非 POST 方法"),
        (status = 500, description = "执行失败，返回数据库原始错误信息")
    )
)]
pub async fn execute_query(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ApiResponse<QueryResult>>, AppError> {
    let req: QueryRequest =
        serde_json::from_str(&body).map_err(|e| AppError::Internal(e.to_string()))?;

    let sql = req
        .sql
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("SQL query is required".to_string()))?
        .to_string();

    let service = QueryService::new(state.pool.clone());
    let result = service.execute(&sql).await?;
    Ok(Json(ApiResponse::table(result)))
}

/// 健康检查与示例查询目录
#[utoipa::path(
    get,
    path = "/sql/health",
    tag = "health",
    responses(
        (status = 200, description = "连通性状态与能力目录（探测失败同样返回 200）", body = ApiResponse<HealthResult>),
        (status = 405, description = "非 GET 方法")
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResult>> {
    let service = QueryService::new(state.pool.clone());
    Json(ApiResponse::health(service.health().await))
}

/// OPTIONS 预检：200 空响应体，不再继续处理
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// 已知路由上的非法 HTTP 方法
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
