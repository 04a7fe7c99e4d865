//! Resolver trait turning a batch of domains into a saved search list.

use crate::domain::entities::SearchListId;
use crate::error::AppError;
use async_trait::async_trait;

/// Saves a domain query with the lead database and returns its list identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::apollo::ApolloClient`] - Apollo `save_query` endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchListResolver: Send + Sync {
    /// Resolves one batch of domains into a saved search list.
    ///
    /// Issues exactly one upstream request and never retries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if no API key is configured.
    /// Returns [`AppError::Upstream`] on transport failures, non-success
    /// statuses, or a success response without a list identifier.
    async fn resolve(&self, domains: &[String]) -> Result<SearchListId, AppError>;

    /// Whether the resolver has the credentials it needs to make requests.
    fn is_configured(&self) -> bool;
}
