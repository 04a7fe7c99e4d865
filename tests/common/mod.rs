#![allow(dead_code)]

use apollo_batch_links::api::handlers::health_handler;
use apollo_batch_links::api::routes::routes;
use apollo_batch_links::config::Config;
use apollo_batch_links::domain::resolvers::SearchListResolver;
use apollo_batch_links::infrastructure::apollo::{ApolloClient, SAVE_QUERY_PATH};
use apollo_batch_links::state::AppState;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Builds state around a real [`ApolloClient`] pointed at `base_url`.
pub fn create_test_state(base_url: &str, api_key: Option<&str>) -> AppState {
    create_test_state_with(Config::default(), base_url, api_key)
}

pub fn create_test_state_with(config: Config, base_url: &str, api_key: Option<&str>) -> AppState {
    let resolver: Arc<dyn SearchListResolver> = Arc::new(
        ApolloClient::new(
            api_key.map(str::to_string),
            base_url,
            Some(Duration::from_secs(5)),
        )
        .unwrap(),
    );

    AppState::new(&config, resolver)
}

/// Router with the health check and every `/api` route, without middleware.
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Expects exactly one save-query call for `domains` and answers with `list_id`.
pub async fn mock_save_query(server: &MockServer, domains: &[&str], list_id: &str) {
    Mock::given(method("POST"))
        .and(path(SAVE_QUERY_PATH))
        .and(header("X-Api-Key", TEST_API_KEY))
        .and(body_json(json!({ "query": domains.join("\n") })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "listId": list_id })))
        .expect(1)
        .mount(server)
        .await;
}

/// Answers any save-query call for `domains` with `status`.
pub async fn mock_save_query_status(server: &MockServer, domains: &[&str], status: u16) {
    Mock::given(method("POST"))
        .and(path(SAVE_QUERY_PATH))
        .and(body_json(json!({ "query": domains.join("\n") })))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream exploded"))
        .expect(1)
        .mount(server)
        .await;
}
