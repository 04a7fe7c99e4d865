//! Apollo lead-database integration.
//!
//! Provides [`ApolloClient`], the production [`crate::domain::resolvers::SearchListResolver`].

mod client;

pub use client::{
    ApolloClient, DEFAULT_BASE_URL, MISSING_API_KEY, MISSING_LIST_ID, SAVE_QUERY_PATH,
};
