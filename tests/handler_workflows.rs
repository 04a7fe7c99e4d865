mod common;

use apollo_batch_links::api::dto::workflows::malformed_item;
use apollo_batch_links::application::services::workflow_service::{
    EMPTY_BATCH_RESULTS, format_run_date,
};
use axum::http::StatusCode;
use chrono::Local;
use serde_json::{Value, json};
use wiremock::MockServer;

async fn server() -> (MockServer, axum_test::TestServer) {
    let apollo = MockServer::start().await;
    let state = common::create_test_state(&apollo.uri(), Some(common::TEST_API_KEY));
    (apollo, common::test_server(state))
}

#[tokio::test]
async fn test_generate_workflows_success() {
    let (_apollo, server) = server().await;

    let response = server
        .post("/api/generate-workflows")
        .json(&json!({
            "batchResults": [
                { "sales": "s1", "marketing": "m1", "it": "i1" },
                { "sales": "s2", "marketing": "m2", "it": "i2" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let date = format_run_date(Local::now().date_naive());
    let json = response.json::<Value>();
    let workflows = json["workflows"].as_array().unwrap();

    assert_eq!(workflows.len(), 6);
    assert_eq!(workflows[0]["apollo_url"], "s1");
    assert_eq!(
        workflows[0]["fileName"],
        format!("BRAD_{date}_BATCH_1_PART_1_SALES")
    );
    assert_eq!(workflows[2]["apollo_url"], "i1");
    assert_eq!(
        workflows[2]["fileName"],
        format!("BRAD_{date}_BATCH_1_PART_3_IT")
    );
    assert_eq!(workflows[4]["apollo_url"], "m2");
    assert_eq!(
        workflows[4]["fileName"],
        format!("BRAD_{date}_BATCH_2_PART_2_MARKETING")
    );
}

#[tokio::test]
async fn test_generate_workflows_rejects_empty_batch_results() {
    let (_apollo, server) = server().await;

    for body in [
        json!({ "batchResults": [] }),
        json!({}),
        json!({ "batchResults": "nope" }),
    ] {
        let response = server.post("/api/generate-workflows").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["message"], EMPTY_BATCH_RESULTS);
    }
}

#[tokio::test]
async fn test_generate_workflows_names_malformed_item() {
    let (_apollo, server) = server().await;

    for (body, number) in [
        (json!({ "batchResults": [{ "sales": "s1" }] }), 1),
        (
            json!({ "batchResults": [
                { "sales": "s1", "marketing": "m1", "it": "i1" },
                "s2"
            ] }),
            2,
        ),
        (
            json!({ "batchResults": [
                { "sales": "s1", "marketing": "m1", "it": "i1" },
                { "sales": "s2", "marketing": "m2", "it": 3 }
            ] }),
            2,
        ),
    ] {
        let response = server.post("/api/generate-workflows").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["message"], malformed_item(number));
    }
}

#[tokio::test]
async fn test_generate_workflows_method_not_allowed() {
    let (_apollo, server) = server().await;

    let response = server.put("/api/generate-workflows").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Method Not Allowed");
}
