mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use order_service::api::routes::order_routes;
use order_service::routes::router;

fn make_server() -> TestServer {
    let table = order_routes().unwrap();
    let app = router(&table, common::create_test_state()).unwrap();
    TestServer::new(app).unwrap()
}

fn content_type(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_orders_returns_empty_json_list() {
    let server = make_server();

    let response = server.get("/orders").await;

    response.assert_status_ok();
    assert!(content_type(&response).starts_with("application/json"));

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"], serde_json::json!([]));
}

#[tokio::test]
async fn test_list_orders_sets_location_header() {
    let server = make_server();

    let response = server.get("/orders").await;

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert_eq!(location, format!("{}/orders", common::TEST_BASE_URL));
}

#[tokio::test]
async fn test_list_orders_with_valid_id_filter() {
    let server = make_server();

    let response = server.get("/orders").add_query_param("Id", 3).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_orders_with_low_id_filter_fails_validation() {
    let server = make_server();

    let response = server.get("/orders").add_query_param("Id", 1).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let errors = json["error"]["details"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "Id");
    assert_eq!(errors[0]["message"], "OrderID has to be greater than 2");
}

// ─── GET ONE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_order_above_threshold_succeeds() {
    let server = make_server();

    let response = server.get("/orders/3").await;

    response.assert_status_ok();
    assert!(content_type(&response).starts_with("application/json"));

    // The stub repository knows no orders, so the body is JSON null.
    let json = response.json::<serde_json::Value>();
    assert!(json.is_null());
}

#[tokio::test]
async fn test_get_order_at_or_below_threshold_fails_validation() {
    let server = make_server();

    for id in [1, 2] {
        let response = server.get(&format!("/orders/{id}")).await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");

        let errors = json["error"]["details"]["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], "Id");
        assert_eq!(errors[0]["message"], "OrderID has to be greater than 2");
    }
}

// ─── MUTATIONS ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_order_returns_no_content() {
    let server = make_server();

    let response = server.post("/orders").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_order_is_not_validated() {
    let server = make_server();

    // The order-id rule applies to GET and POST only.
    let response = server.put("/orders/1").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_order_is_not_validated() {
    let server = make_server();

    let response = server.delete("/orders/1").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

// ─── ROUTING ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unregistered_path_returns_not_found() {
    let server = make_server();

    let response = server.get("/customers").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/customers");
}

#[tokio::test]
async fn test_deeper_path_under_orders_returns_not_found() {
    let server = make_server();

    let response = server.get("/orders/1/lines").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
