mod common;

use apollo_batch_links::infrastructure::apollo::{MISSING_API_KEY, MISSING_LIST_ID, SAVE_QUERY_PATH};
use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_organization_id_success() {
    let apollo = MockServer::start().await;
    common::mock_save_query(&apollo, &["acme.com", "globex.com"], "list-123").await;

    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/get-organization-id")
        .json(&json!({ "domains": ["acme.com", "globex.com"] }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["searchListId"], "list-123");
}

#[tokio::test]
async fn test_get_organization_id_without_api_key() {
    let apollo = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SAVE_QUERY_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&apollo)
        .await;

    let state = common::create_test_state(&apollo.uri(), None);
    let server = common::test_server(state);

    let response = server
        .post("/api/get-organization-id")
        .json(&json!({ "domains": ["acme.com"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["message"], MISSING_API_KEY);
}

#[tokio::test]
async fn test_get_organization_id_rejects_empty_domains() {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    for body in [
        json!({ "domains": [] }),
        json!({}),
        json!({ "domains": "acme.com" }),
    ] {
        let response = server.post("/api/get-organization-id").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(
            json["message"],
            "domains array is required and must not be empty"
        );
    }
}

#[tokio::test]
async fn test_get_organization_id_upstream_error() {
    let apollo = MockServer::start().await;
    common::mock_save_query_status(&apollo, &["acme.com"], 502).await;

    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/get-organization-id")
        .json(&json!({ "domains": ["acme.com"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Apollo returned a 502 status.");
}

#[tokio::test]
async fn test_get_organization_id_missing_list_id() {
    let apollo = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SAVE_QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "saved" })))
        .mount(&apollo)
        .await;

    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/get-organization-id")
        .json(&json!({ "domains": ["acme.com"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["message"], MISSING_LIST_ID);
}

#[tokio::test]
async fn test_get_organization_id_method_not_allowed() {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server.get("/api/get-organization-id").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Method Not Allowed");
}

#[tokio::test]
async fn test_get_organization_id_checks_api_key_before_body() {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), None);
    let server = common::test_server(state);

    for body in [json!({}), json!({ "domains": [] }), json!({ "domains": 42 })] {
        let response = server.post("/api/get-organization-id").json(&body).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<Value>();
        assert_eq!(json["message"], MISSING_API_KEY);
    }
}
