mod common;

use axum::http::{HeaderValue, Method, StatusCode, header};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::sync::Arc;

fn ids(list: &Value) -> BTreeSet<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

// ─── CREATE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_expense_assigns_id() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/expenses")
        .json(&common::expense_json("Groceries", 42.5))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert!(body["id"].is_i64());
    assert_eq!(body["title"], "Groceries");
    assert_eq!(body["category"], "Food");
    assert_eq!(body["amount"], 42.5);
    assert_eq!(body["date"], "2025-03-14");
    assert_eq!(body["paymentMethod"], "Card");
}

#[tokio::test]
async fn test_create_expense_ids_are_distinct() {
    let server = common::make_server(common::create_test_state());

    let first = server
        .post("/api/expenses")
        .json(&common::expense_json("Coffee", 3.0))
        .await
        .json::<Value>();
    let second = server
        .post("/api/expenses")
        .json(&common::expense_json("Tea", 2.5))
        .await
        .json::<Value>();

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_expense_missing_field_rejected() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/expenses")
        .json(&json!({ "title": "No amount", "category": "Food" }))
        .await;

    assert!(response.status_code().is_client_error());

    let list = server.get("/api/expenses").await.json::<Value>();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_expense_storage_failure() {
    let server = common::make_server(common::state_with(Arc::new(common::FailingRepository)));

    let response = server
        .post("/api/expenses")
        .json(&common::expense_json("Groceries", 42.5))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_expenses_empty() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/api/expenses").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_expenses_returns_all_in_id_order() {
    let server = common::make_server(common::create_test_state());

    for (title, amount) in [("Rent", 900.0), ("Bus", 2.0), ("Movie", 12.0)] {
        server
            .post("/api/expenses")
            .json(&common::expense_json(title, amount))
            .await
            .assert_status_ok();
    }

    let list = server.get("/api/expenses").await.json::<Value>();
    let items = list.as_array().unwrap();

    assert_eq!(items.len(), 3);
    let order: Vec<i64> = items.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);

    let titles: Vec<&str> = items.iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Rent", "Bus", "Movie"]);
}

// ─── UPDATE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_expense_replaces_record() {
    let server = common::make_server(common::create_test_state());

    let created = server
        .post("/api/expenses")
        .json(&common::expense_json("Dinner", 30.0))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/expenses/{id}"))
        .json(&json!({
            "title": "Dinner with friends",
            "category": "Entertainment",
            "amount": 55.0,
            "date": "2025-03-15",
            "paymentMethod": "Cash"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Dinner with friends");
    assert_eq!(body["paymentMethod"], "Cash");

    let list = server.get("/api/expenses").await.json::<Value>();
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["amount"], 55.0);
    assert_eq!(items[0]["category"], "Entertainment");
}

#[tokio::test]
async fn test_update_path_id_wins_over_body_id() {
    let server = common::make_server(common::create_test_state());

    let created = server
        .post("/api/expenses")
        .json(&common::expense_json("Shoes", 80.0))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let mut body = common::expense_json("Shoes (sale)", 60.0);
    body["id"] = json!(id + 1000);

    let response = server.put(&format!("/api/expenses/{id}")).json(&body).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], id);

    let list = server.get("/api/expenses").await.json::<Value>();
    assert_eq!(ids(&list), BTreeSet::from([id]));
}

#[tokio::test]
async fn test_update_unknown_id_creates_record() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .put("/api/expenses/77")
        .json(&common::expense_json("Gift", 20.0))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], 77);

    let next = server
        .post("/api/expenses")
        .json(&common::expense_json("Card", 4.0))
        .await
        .json::<Value>();
    assert!(next["id"].as_i64().unwrap() > 77);

    let list = server.get("/api/expenses").await.json::<Value>();
    assert!(ids(&list).contains(&77));
}

#[tokio::test]
async fn test_update_non_numeric_id_rejected() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .put("/api/expenses/abc")
        .json(&common::expense_json("Gift", 20.0))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── DELETE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_expense_removes_from_list() {
    let server = common::make_server(common::create_test_state());

    let keep = server
        .post("/api/expenses")
        .json(&common::expense_json("Keep", 1.0))
        .await
        .json::<Value>();
    let gone = server
        .post("/api/expenses")
        .json(&common::expense_json("Drop", 2.0))
        .await
        .json::<Value>();
    let gone_id = gone["id"].as_i64().unwrap();

    let response = server.delete(&format!("/api/expenses/{gone_id}")).await;

    response.assert_status_ok();
    assert!(response.as_bytes().is_empty());

    let list = server.get("/api/expenses").await.json::<Value>();
    assert_eq!(ids(&list), BTreeSet::from([keep["id"].as_i64().unwrap()]));
}

#[tokio::test]
async fn test_delete_unknown_expense_is_ok() {
    let server = common::make_server(common::create_test_state());

    let response = server.delete("/api/expenses/999").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_delete_storage_failure() {
    let server = common::make_server(common::state_with(Arc::new(common::FailingRepository)));

    let response = server.delete("/api/expenses/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ─── LIFECYCLE / CORS ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_matches_created_updated_and_not_deleted() {
    let server = common::make_server(common::create_test_state());

    let mut expected = BTreeSet::new();
    for i in 0..5 {
        let body = server
            .post("/api/expenses")
            .json(&common::expense_json(&format!("item {i}"), i as f64))
            .await
            .json::<Value>();
        expected.insert(body["id"].as_i64().unwrap());
    }

    server
        .put("/api/expenses/500")
        .json(&common::expense_json("upserted", 5.0))
        .await
        .assert_status_ok();
    expected.insert(500);

    let removed = *expected.iter().next().unwrap();
    server
        .delete(&format!("/api/expenses/{removed}"))
        .await
        .assert_status_ok();
    expected.remove(&removed);

    let list = server.get("/api/expenses").await.json::<Value>();
    assert_eq!(ids(&list), expected);
}

#[tokio::test]
async fn test_expense_routes_allow_any_origin() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .get("/api/expenses")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_expense_routes_answer_preflight() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .method(Method::OPTIONS, "/api/expenses/1")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:5173"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("PUT"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type"),
        )
        .await;

    assert!(response.status_code().is_success());

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "*");
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "*");
}
