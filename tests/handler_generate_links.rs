mod common;

use apollo_batch_links::config::Config;
use axum::http::StatusCode;
use serde_json::Value;
use wiremock::MockServer;

fn small_batches(size: usize) -> Config {
    Config {
        batch_size: size,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_generate_links_multiple_batches() {
    let apollo = MockServer::start().await;
    common::mock_save_query(&apollo, &["a.com", "b.com"], "list-1").await;
    common::mock_save_query(&apollo, &["c.com"], "list-2").await;

    let state =
        common::create_test_state_with(small_batches(2), &apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/generate-links")
        .text("name,domain\nA,a.com\nB, b.com \nC,c.com\n")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert!(json.get("message").is_none());
    assert_eq!(json["totalDomains"], 3);
    assert_eq!(json["totalBatches"], 2);

    let batches = json["batchResults"].as_array().unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0]["batch"], 1);
    assert!(
        batches[0]["sales"]
            .as_str()
            .unwrap()
            .contains("qOrganizationSearchListId=list-1")
    );
    assert_eq!(batches[1]["batch"], 2);
    assert!(
        batches[1]["it"]
            .as_str()
            .unwrap()
            .contains("qOrganizationSearchListId=list-2")
    );
}

#[tokio::test]
async fn test_generate_links_missing_domain_column() {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/generate-links")
        .text("name,website\nA,a.com\n")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "CSV must have a column named 'domain'.");
}

#[tokio::test]
async fn test_generate_links_empty_domain_column() {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/generate-links")
        .text("name,domain\nA,\nB,\n")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "No domains found in the specified column.");
}

#[tokio::test]
async fn test_generate_links_keeps_completed_batches_on_failure() {
    let apollo = MockServer::start().await;
    common::mock_save_query(&apollo, &["a.com"], "list-1").await;
    common::mock_save_query_status(&apollo, &["b.com"], 500).await;

    let state =
        common::create_test_state_with(small_batches(1), &apollo.uri(), Some(common::TEST_API_KEY));
    let server = common::test_server(state);

    let response = server
        .post("/api/generate-links")
        .text("domain\na.com\nb.com\nc.com\n")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["message"], "Apollo returned a 500 status.");
    assert_eq!(json["totalDomains"], 3);
    assert_eq!(json["totalBatches"], 3);

    let batches = json["batchResults"].as_array().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0]["batch"], 1);
}

#[tokio::test]
async fn test_generate_links_without_api_key() {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), None);
    let server = common::test_server(state);

    let response = server.post("/api/generate-links").text("domain\na.com\n").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "API Key is not configured.");
    assert_eq!(json["batchResults"].as_array().unwrap().len(), 0);
}
