use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    response::{Json, Redirect},
    routing::{get, post},
    Router,
};
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Deserialize)]
struct ListQuery {
    page: Option<u32>,
    sort_order: Option<String>,
    filter: Option<String>,
}

// App de test autocontenida con la misma forma HTTP que el servicio real
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "service": "plate-catalog", "status": "healthy" })) }),
        )
        .route(
            "/api/plates",
            get(|Query(q): Query<ListQuery>| async move {
                Json(json!({
                    "plates": [],
                    "page": q.page.unwrap_or(1),
                    "sort_order": q.sort_order.unwrap_or_else(|| "asc".to_string()),
                    "filter": q.filter,
                }))
            }),
        )
        .route(
            "/api/plates/:id/toggle-reservation",
            post(|| async { Redirect::to("/api/plates") }),
        )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "plate-catalog");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_defaults_are_echoed() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/api/plates").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["sort_order"], "asc");
    assert_eq!(body["filter"], Value::Null);
}

#[tokio::test]
async fn test_list_parameters_are_echoed() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::get("/api/plates?page=3&sort_order=desc&filter=A1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 3);
    assert_eq!(body["sort_order"], "desc");
    assert_eq!(body["filter"], "A1");
}

#[tokio::test]
async fn test_toggle_redirects_to_listing() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::post("/api/plates/550e8400-e29b-41d4-a716-446655440000/toggle-reservation")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/api/plates"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
