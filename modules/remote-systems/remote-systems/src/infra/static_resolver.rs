//! Static authorization resolver backed by a fixed set of records.

use std::collections::HashMap;

use async_trait::async_trait;
use remote_systems_sdk::{AuthorizationRecord, AuthorizationResolver, CallerId};
use tracing::info;

use crate::config::StaticResolverConfig;

/// Resolver serving records loaded once at construction.
///
/// Unknown callers resolve to `None`. The record set never changes after
/// construction, so lookups need no locking.
#[derive(Debug, Default)]
pub struct StaticAuthorizationResolver {
    records: HashMap<CallerId, AuthorizationRecord>,
}

impl StaticAuthorizationResolver {
    /// Build from records. A later record with the same id replaces an earlier one.
    pub fn new(records: impl IntoIterator<Item = AuthorizationRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            if let Some(previous) = map.insert(record.id().clone(), record) {
                tracing::warn!(caller_id = %previous.id(), "Duplicate authorization record replaced");
            }
        }
        Self { records: map }
    }

    #[must_use]
    pub fn from_config(cfg: &StaticResolverConfig) -> Self {
        let resolver = Self::new(cfg.records.iter().cloned());
        info!(records = resolver.len(), "Static authorization resolver initialized");
        resolver
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl AuthorizationResolver for StaticAuthorizationResolver {
    async fn resolve(&self, caller_id: &CallerId) -> Option<AuthorizationRecord> {
        self.records.get(caller_id).cloned()
    }
}
