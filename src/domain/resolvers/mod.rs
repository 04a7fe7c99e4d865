//! Resolver trait definitions for the domain layer.
//!
//! Traits here abstract the external lead database so services can be tested
//! without network access. Implementations live in
//! `crate::infrastructure::apollo`; mocks are generated via `mockall`.

pub mod search_list_resolver;

pub use search_list_resolver::SearchListResolver;

#[cfg(test)]
pub use search_list_resolver::MockSearchListResolver;
