use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::DispatchError;

/// Field selection and relation expansion for a provider fetch.
///
/// Templates render deeply nested data (a swap's return order and its
/// shipping option, for example), so each domain type asks its provider
/// for an explicit expansion instead of relying on a minimal fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub select: Vec<String>,
    pub relations: Vec<String>,
}

/// Read-only access to a host domain store (orders, swaps, invites).
///
/// Implementations live in the host application; this crate only consumes
/// them. Failures propagate to the dispatch caller without retry.
#[async_trait]
pub trait DomainProvider: Send + Sync {
    /// Fetch a single aggregate by id, expanding the requested relations.
    async fn retrieve(&self, id: &str, options: QueryOptions)
    -> Result<JsonValue, DispatchError>;

    /// List aggregates matching a filter.
    async fn list(
        &self,
        filter: JsonValue,
        options: QueryOptions,
    ) -> Result<Vec<JsonValue>, DispatchError>;
}

/// The domain stores the data resolver dispatches over.
#[derive(Clone)]
pub struct DomainProviders {
    pub order: Arc<dyn DomainProvider>,
    pub swap: Arc<dyn DomainProvider>,
    pub invite: Arc<dyn DomainProvider>,
}
