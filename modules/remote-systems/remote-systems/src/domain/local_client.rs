//! Local (in-process) client for the `remote_systems` module.

use std::sync::Arc;

use async_trait::async_trait;
use remote_systems_sdk::{
    AuthorizationResolver, CallerId, DelegationError, RemoteSystem, RemoteSystemsClient,
    ResourceRef, ResourceStore,
};

use super::{DelegationManager, actions};
use crate::config::RemoteSystemsConfig;
use crate::infra::{InMemoryResourceStore, StaticAuthorizationResolver};

/// Local client wrapping the delegation manager for remote systems.
pub struct RemoteSystemsLocalClient {
    manager: Arc<DelegationManager<RemoteSystem>>,
}

impl RemoteSystemsLocalClient {
    #[must_use]
    pub fn new(manager: Arc<DelegationManager<RemoteSystem>>) -> Self {
        Self { manager }
    }

    /// Wire a client over the in-process collaborators described by `cfg`.
    #[must_use]
    pub fn from_config(cfg: &RemoteSystemsConfig) -> Self {
        let resolver: Arc<dyn AuthorizationResolver> =
            Arc::new(StaticAuthorizationResolver::from_config(&cfg.resolver));
        let store: Arc<dyn ResourceStore<RemoteSystem>> =
            Arc::new(InMemoryResourceStore::from_config(&cfg.store));
        let manager = DelegationManager::new(resolver, store).with_options(cfg.into());
        tracing::info!(options = ?manager.options(), "Remote systems client initialized");
        Self::new(Arc::new(manager))
    }
}

fn logged(operation: &str, result: Result<(), DelegationError>) -> Result<(), DelegationError> {
    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "Remote system operation failed");
    }
    result
}

#[async_trait]
impl RemoteSystemsClient for RemoteSystemsLocalClient {
    async fn start(
        &self,
        caller_id: &CallerId,
        remote_id: &ResourceRef,
    ) -> Result<(), DelegationError> {
        logged(actions::START, self.manager.start(caller_id, remote_id).await)
    }

    async fn stop(
        &self,
        caller_id: &CallerId,
        remote_id: &ResourceRef,
    ) -> Result<(), DelegationError> {
        logged(actions::STOP, self.manager.stop(caller_id, remote_id).await)
    }

    async fn add(&self, caller_id: &CallerId, remote: RemoteSystem) -> Result<(), DelegationError> {
        logged(actions::ADD, self.manager.add(caller_id, remote).await)
    }

    async fn delete(
        &self,
        caller_id: &CallerId,
        remote_id: &ResourceRef,
    ) -> Result<(), DelegationError> {
        logged(actions::DELETE, self.manager.delete(caller_id, remote_id).await)
    }
}
