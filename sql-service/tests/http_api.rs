//! 端到端 HTTP 行为测试
//!
//! 用内存 SQLite 构建完整路由，通过 `tower::ServiceExt::oneshot` 驱动。

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::config::AppConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sql_service::create_router;
use sql_service::state::AppState;
use tower::ServiceExt;

async fn test_app() -> Router {
    let mut config = AppConfig::load_with_service("sql-service-test");
    config.database_url = "sqlite::memory:".to_string();
    let state = AppState::new(config).await.expect("state init failed");
    create_router(state)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(content) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(content.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post_query(app: Router, sql_body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/sql/query", Some(&sql_body.to_string())).await
}

#[tokio::test]
async fn test_select_result_is_normalized() {
    let app = test_app().await;
    let (status, body) = post_query(app, json!({"sql": "SELECT 1 AS X"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "TABLE");
    assert_eq!(body["data"]["columns"], json!(["X"]));
    assert_eq!(body["data"]["rows"], json!([[1]]));
    assert_eq!(body["data"]["count"], 1);
    assert!(body["data"]["execTimeMs"].as_u64().is_some());
}

#[tokio::test]
async fn test_select_rows_align_with_columns() {
    let app = test_app().await;
    let (status, body) = post_query(
        app,
        json!({"sql": "SELECT first_name, last_name, email FROM students"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let columns = body["data"]["columns"].as_array().unwrap();
    let rows = body["data"]["rows"].as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row.as_array().unwrap().len(), columns.len());
    }
}

#[tokio::test]
async fn test_delete_without_match_reports_zero() {
    let app = test_app().await;
    let (status, body) = post_query(
        app,
        json!({"sql": "DELETE FROM students WHERE id = 'missing'"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "TABLE");
    assert_eq!(body["data"]["columns"], json!(["rows_affected"]));
    assert_eq!(body["data"]["rows"], json!([[0]]));
    assert_eq!(body["data"]["count"], 0);
}

#[tokio::test]
async fn test_insert_reports_affected_count() {
    let app = test_app().await;
    let (status, body) = post_query(
        app,
        json!({"sql": "INSERT INTO favorites (id, student_id, category, favorite) \
                        VALUES ('f-901', 's-001', 'FOOD', 'Tacos'), \
                               ('f-902', 's-002', 'FOOD', 'Pho')"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rows"], json!([[2]]));
    assert_eq!(body["data"]["count"], 2);
}

#[tokio::test]
async fn test_date_column_serializes_as_iso_string() {
    let app = test_app().await;
    let (status, body) = post_query(
        app,
        json!({"sql": "SELECT birth_date FROM students WHERE id = 's-001'"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rows"], json!([["2007-03-05"]]));
}

#[tokio::test]
async fn test_blank_sql_is_rejected_with_fixed_message() {
    for payload in [json!({"sql": ""}), json!({"sql": "   "}), json!({})] {
        let app = test_app().await;
        let (status, body) = post_query(app, payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "ERROR");
        assert_eq!(body["data"]["errorMessage"], "SQL query is required");
    }
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let app = test_app().await;
    let (status, body) = send(app, Method::POST, "/sql/query", Some("not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["type"], "ERROR");
}

#[tokio::test]
async fn test_malformed_sql_surfaces_driver_message() {
    let app = test_app().await;
    let (status, body) = post_query(app, json!({"sql": "SELEC 1"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["type"], "ERROR");
    let message = body["data"]["errorMessage"].as_str().unwrap();
    assert!(message.contains("syntax error"), "got: {message}");
}

#[tokio::test]
async fn test_wrong_method_is_405_with_error_envelope() {
    let app = test_app().await;
    let (status, body) = send(app.clone(), Method::GET, "/sql/query", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["type"], "ERROR");
    assert_eq!(body["data"]["errorMessage"], "Method Not Allowed");

    let (status, body) = send(app, Method::POST, "/sql/health", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["type"], "ERROR");
}

#[tokio::test]
async fn test_options_short_circuits_with_empty_body() {
    let app = test_app().await;
    for uri in ["/sql/query", "/sql/health"] {
        let (status, body) = send(app.clone(), Method::OPTIONS, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }
}

#[tokio::test]
async fn test_health_reports_connectivity_and_catalog() {
    let app = test_app().await;
    let (status, body) = send(app, Method::GET, "/sql/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "HEALTH");
    assert_eq!(body["data"]["connected"], true);
    assert_eq!(body["data"]["message"], "Green means go!");
    assert!(!body["data"]["tableNames"].as_array().unwrap().is_empty());
    let queries = body["data"]["sampleQueries"].as_array().unwrap();
    assert!(!queries.is_empty());
    for query in queries {
        assert!(query["title"].is_string());
        assert!(query["query"].is_string());
        assert!(query["category"].is_string());
    }
}

#[tokio::test]
async fn test_responses_carry_cors_headers() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/sql/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
