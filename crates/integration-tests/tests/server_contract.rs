//! Raw HTTP contract of the directory server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use people_directory_integration_tests::TestServer;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

async fn create(client: &Client, base_url: &str, body: &Value) -> Value {
    let resp = client.post(base_url).json(body).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn test_list_is_json_array() {
    let server = TestServer::start().await;
    let resp = Client::new().get(server.base_url()).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_delete_round() {
    let server = TestServer::start().await;
    let client = Client::new();
    let base_url = server.base_url();

    let created = create(
        &client,
        &base_url,
        &json!({"first_name": "Ada", "last_name": "Lovelace", "role": "admin"}),
    )
    .await;
    assert_eq!(created["message"], "Item added successfully");
    let id = created["updated_list"][0]["id"].as_str().unwrap().to_owned();

    let resp = client
        .delete(format!("{base_url}{id}"))
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["deleted_item"]["first_name"], "Ada");
    assert_eq!(body["updated_list"], json!([]));

    let listed: Value = client
        .get(&base_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_records_keep_insertion_order() {
    let server = TestServer::start().await;
    let client = Client::new();
    let base_url = server.base_url();

    for first in ["Ada", "Alan", "Grace"] {
        create(
            &client,
            &base_url,
            &json!({"first_name": first, "last_name": "X", "role": "student"}),
        )
        .await;
    }

    let listed: Value = client
        .get(&base_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ada", "Alan", "Grace"]);
}

#[tokio::test]
async fn test_delete_unknown_returns_current_list() {
    let server = TestServer::start().await;
    let resp = Client::new()
        .delete(format!("{}missing", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "User not found. Operation failed");
    assert_eq!(body["current_list"], json!([]));
}

#[tokio::test]
async fn test_preflight_is_answered() {
    let server = TestServer::start().await;
    let resp = Client::new()
        .request(reqwest::Method::OPTIONS, server.base_url())
        .header("origin", "http://localhost:5500")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
