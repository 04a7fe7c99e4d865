//! Apollo `save_query` client.

use crate::domain::entities::SearchListId;
use crate::domain::resolvers::SearchListResolver;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Production Apollo origin.
pub const DEFAULT_BASE_URL: &str = "https://app.apollo.io";

/// Endpoint that stores a domain query and returns its list identifier.
pub const SAVE_QUERY_PATH: &str = "/api/v1/organization_search_lists/save_query";

const USER_AGENT: &str = concat!("apollo-batch-links/", env!("CARGO_PKG_VERSION"));

pub const MISSING_API_KEY: &str = "API Key is not configured.";
pub const MISSING_LIST_ID: &str =
    "Response from Apollo was successful, but did not contain a 'listId'.";

#[derive(Debug, Serialize)]
struct SaveQueryRequest<'a> {
    query: &'a str,
}

/// Apollo API client resolving domain batches into saved search lists.
///
/// The API key is checked once at construction; a client without a key
/// refuses every request with a configuration error.
pub struct ApolloClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ApolloClient {
    /// Creates a client for `base_url` (e.g. `https://app.apollo.io`).
    ///
    /// An empty `api_key` is treated as absent. Without a `timeout` a request
    /// waits as long as the transport allows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the HTTP client cannot be built.
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        let api_key = api_key.filter(|key| !key.is_empty());
        if api_key.is_none() {
            tracing::warn!("Apollo API key is not configured; organization lookups will fail");
        }

        Ok(Self {
            http_client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SAVE_QUERY_PATH),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchListResolver for ApolloClient {
    async fn resolve(&self, domains: &[String]) -> Result<SearchListId, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration(MISSING_API_KEY))?;

        let query = domains.join("\n");

        tracing::debug!(domains = domains.len(), "Saving Apollo domain query");

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("X-Api-Key", api_key)
            .json(&SaveQueryRequest { query: &query })
            .send()
            .await
            .map_err(|e| {
                metrics::counter!("apollo_requests_total", "outcome" => "transport_error")
                    .increment(1);
                AppError::upstream(format!("Failed to reach Apollo: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            metrics::counter!("apollo_requests_total", "outcome" => "body_read_error").increment(1);
            tracing::error!(status = status.as_u16(), error = %e, "Failed to read Apollo response");
            AppError::upstream(format!("Failed to read Apollo response: {e}"))
        })?;

        if !status.is_success() {
            metrics::counter!("apollo_requests_total", "outcome" => "error_status").increment(1);
            tracing::error!(status = status.as_u16(), body = %body, "Apollo error response");
            return Err(AppError::upstream(format!(
                "Apollo returned a {} status.",
                status.as_u16()
            )));
        }

        let Some(list_id) = extract_list_id(&body) else {
            metrics::counter!("apollo_requests_total", "outcome" => "missing_list_id").increment(1);
            tracing::error!(body = %body, "Apollo response did not contain a listId");
            return Err(AppError::upstream(MISSING_LIST_ID));
        };

        metrics::counter!("apollo_requests_total", "outcome" => "success").increment(1);
        tracing::info!(list_id = %list_id, domains = domains.len(), "Apollo search list saved");

        Ok(list_id)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Reads a non-empty `listId` from a JSON body. Numeric ids are accepted
/// unless zero.
fn extract_list_id(body: &str) -> Option<SearchListId> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("listId")? {
        Value::String(id) if !id.is_empty() => Some(SearchListId::new(id.as_str())),
        Value::Number(id) if id.as_f64() != Some(0.0) => Some(SearchListId::new(id.to_string())),
        _ => None,
    }
}
