//! Integration tests for /api/v1/partners

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::json;

mod common;
use common::{delete, get, post, put, send_request, setup_test_app};

const BASE: &str = "/api/v1/partners";

#[tokio::test]
async fn test_list_partners_empty() {
    let app = setup_test_app().await;
    let (status, body) = get(&app, &format!("{BASE}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_list_get_replace_and_delete_partner() {
    let app = setup_test_app().await;

    let (status, partner) = post(&app, &format!("{BASE}/"), json!({"data": {"foo": "bar"}})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(partner["data"], json!({"foo": "bar"}));
    let id = partner["id"].as_i64().unwrap();

    let (status, list) = get(&app, &format!("{BASE}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().iter().any(|p| p["id"] == id));

    let (status, fetched) = get(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], json!({"foo": "bar"}));

    let (status, replaced) =
        put(&app, &format!("{BASE}/{id}"), json!({"data": {"baz": 123}})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced, json!({"id": id, "data": {"baz": 123}}));

    let (status, _) = delete(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_arbitrary_json_round_trips() {
    let app = setup_test_app().await;
    let payloads = [
        json!({}),
        json!({"s": "text", "i": 42, "f": -0.25, "t": true, "n": null}),
        json!({"list": [1, "two", [3], {"four": 4}], "nested": {"a": {"b": {"c": []}}}}),
    ];
    for data in payloads {
        let (status, created) =
            post(&app, &format!("{BASE}/"), json!({ "data": data.clone() })).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();
        let (_, fetched) = get(&app, &format!("{BASE}/{id}")).await;
        assert_eq!(fetched["data"], data);
    }

    // Integers beyond i64/u64/f64 range and negative zero come back as written.
    let raw = r#"{"data":{"big":100000000000000000000000000000,"neg":-0}}"#;
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{BASE}/"))
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    let (status, created) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = get(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["big"].to_string(), "100000000000000000000000000000");
    assert_eq!(fetched["data"]["neg"].to_string(), "-0");
    assert_eq!(
        serde_json::to_string(&fetched["data"]).unwrap(),
        r#"{"big":100000000000000000000000000000,"neg":-0}"#
    );
}

#[tokio::test]
async fn test_validation_and_not_found() {
    let app = setup_test_app().await;

    let (status, _) = post(&app, &format!("{BASE}/"), json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, seed) = post(&app, &format!("{BASE}/"), json!({"data": {"x": "y"}})).await;
    let id = seed["id"].as_i64().unwrap();
    let (status, body) = put(&app, &format!("{BASE}/{id}"), json!({"foo": "bar"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"]["field"], "data");
    let (_, unchanged) = get(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(unchanged, seed);

    let (status, _) = put(&app, &format!("{BASE}/9999"), json!({"data": {"a": 1}})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete(&app, &format!("{BASE}/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Partner with id=9999 not found");
}

#[tokio::test]
async fn test_non_object_data_is_rejected() {
    let app = setup_test_app().await;
    for data in [json!("string"), json!([1, 2, 3]), json!(7), json!(null)] {
        let (status, _) = post(&app, &format!("{BASE}/"), json!({ "data": data.clone() })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "data {}", data);
    }
    let (_, list) = get(&app, &format!("{BASE}/")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_partner_twice() {
    let app = setup_test_app().await;
    let (_, partner) = post(&app, &format!("{BASE}/"), json!({"data": {"k": "v"}})).await;
    let id = partner["id"].as_i64().unwrap();

    let (status, body) = delete(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, body) = delete(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], format!("Partner with id={id} not found"));
}

#[tokio::test]
async fn test_invalid_put_on_missing_partner_is_not_found() {
    let app = setup_test_app().await;
    for bad in [json!({}), json!({"foo": "bar"}), json!({"data": "x"}), json!([1])] {
        let (status, body) = put(&app, &format!("{BASE}/9999"), bad.clone()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "body {}", bad);
        assert_eq!(body["error"]["code"], "not_found");
    }
    let (_, list) = get(&app, &format!("{BASE}/")).await;
    assert_eq!(list, json!([]));
}
