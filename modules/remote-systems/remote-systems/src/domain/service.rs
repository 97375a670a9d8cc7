//! Delegation manager: resolve the caller, then act on the store.

use std::sync::Arc;

use remote_systems_sdk::{
    AuthorizationRecord, AuthorizationResolver, CallerId, DelegationError, ResourceQuery,
    ResourceRef, ResourceStore, ResourceStoreError,
};
use tracing::instrument;

use super::actions;
use crate::config::{AbsentAuthorization, RemoteSystemsConfig};

/// Behavior switches fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelegationOptions {
    pub absent_authorization: AbsentAuthorization,
}

impl From<&RemoteSystemsConfig> for DelegationOptions {
    fn from(cfg: &RemoteSystemsConfig) -> Self {
        Self {
            absent_authorization: cfg.absent_authorization,
        }
    }
}

/// Authorization-gated access to a store of `T`.
///
/// Holds the two collaborators it was built with and nothing else; there is
/// no per-operation state, so one manager can serve concurrent callers.
///
/// The resolved [`AuthorizationRecord`] (never the raw caller id) is what
/// the store receives. When the resolver finds no record, the absence is
/// forwarded to the store by default, and the store is expected to refuse
/// it. With [`AbsentAuthorization::Reject`] the manager refuses locally
/// instead, after the resolver call and without touching the store.
pub struct DelegationManager<T> {
    resolver: Arc<dyn AuthorizationResolver>,
    store: Arc<dyn ResourceStore<T>>,
    options: DelegationOptions,
}

impl<T: Send + 'static> DelegationManager<T> {
    #[must_use]
    pub fn new(
        resolver: Arc<dyn AuthorizationResolver>,
        store: Arc<dyn ResourceStore<T>>,
    ) -> Self {
        Self {
            resolver,
            store,
            options: DelegationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DelegationOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> DelegationOptions {
        self.options
    }

    /// Gate a start of `resource_ref` behind the caller's authorization.
    ///
    /// Starting the system itself happens outside this layer; the call
    /// succeeds when the store lets the caller read the resource.
    ///
    /// # Errors
    ///
    /// `DelegationError::Store` if the store rejects the read.
    #[instrument(skip_all, fields(operation = actions::START, caller_id = %caller_id, resource_ref = %resource_ref))]
    pub async fn start(
        &self,
        caller_id: &CallerId,
        resource_ref: &ResourceRef,
    ) -> Result<(), DelegationError> {
        self.gated_read(actions::START, caller_id, resource_ref).await
    }

    /// Gate a stop of `resource_ref` behind the caller's authorization.
    ///
    /// # Errors
    ///
    /// `DelegationError::Store` if the store rejects the read.
    #[instrument(skip_all, fields(operation = actions::STOP, caller_id = %caller_id, resource_ref = %resource_ref))]
    pub async fn stop(
        &self,
        caller_id: &CallerId,
        resource_ref: &ResourceRef,
    ) -> Result<(), DelegationError> {
        self.gated_read(actions::STOP, caller_id, resource_ref).await
    }

    /// Upsert `payload` on behalf of the caller.
    ///
    /// # Errors
    ///
    /// - `DelegationError::Store` if the store rejects the upsert
    /// - `DelegationError::OperationFailed` if the store reports `false`
    #[instrument(skip_all, fields(operation = actions::ADD, caller_id = %caller_id))]
    pub async fn add(&self, caller_id: &CallerId, payload: T) -> Result<(), DelegationError> {
        let auth = self.authorize(caller_id).await?;

        let added = self
            .store
            .upsert(auth.as_ref(), payload)
            .await
            .map_err(|e| store_failure(actions::ADD, e))?;

        check_outcome(actions::ADD, added, || "cannot add resource".to_owned())
    }

    /// Delete `resource_ref` on behalf of the caller.
    ///
    /// # Errors
    ///
    /// - `DelegationError::Store` if the store rejects the delete
    /// - `DelegationError::OperationFailed` if the store reports `false`
    #[instrument(skip_all, fields(operation = actions::DELETE, caller_id = %caller_id, resource_ref = %resource_ref))]
    pub async fn delete(
        &self,
        caller_id: &CallerId,
        resource_ref: &ResourceRef,
    ) -> Result<(), DelegationError> {
        let auth = self.authorize(caller_id).await?;

        let deleted = self
            .store
            .delete(auth.as_ref(), resource_ref)
            .await
            .map_err(|e| store_failure(actions::DELETE, e))?;

        check_outcome(actions::DELETE, deleted, || {
            format!("cannot delete resource '{resource_ref}': does it exist?")
        })
    }

    async fn gated_read(
        &self,
        operation: &'static str,
        caller_id: &CallerId,
        resource_ref: &ResourceRef,
    ) -> Result<(), DelegationError> {
        let auth = self.authorize(caller_id).await?;

        let query = ResourceQuery::by_id(resource_ref);
        let matched = self
            .store
            .read(auth.as_ref(), &query)
            .await
            .map_err(|e| store_failure(operation, e))?;

        tracing::debug!(matched = matched.len(), "Store granted access");
        Ok(())
    }

    /// First step of every operation. Calls the resolver exactly once.
    async fn authorize(
        &self,
        caller_id: &CallerId,
    ) -> Result<Option<AuthorizationRecord>, DelegationError> {
        let auth = self.resolver.resolve(caller_id).await;

        if auth.is_some() {
            tracing::debug!("Authorization record resolved");
            return Ok(auth);
        }

        match self.options.absent_authorization {
            AbsentAuthorization::Forward => {
                tracing::debug!("No authorization record; forwarding absence to store");
                Ok(None)
            }
            AbsentAuthorization::Reject => {
                tracing::warn!("No authorization record; rejecting without store call");
                Err(DelegationError::Store(ResourceStoreError::permission_denied(
                    format!("no authorization record for caller '{caller_id}'"),
                )))
            }
        }
    }
}

fn store_failure(operation: &str, e: ResourceStoreError) -> DelegationError {
    tracing::warn!(operation, error = %e, "Resource store rejected the operation");
    e.into()
}

fn check_outcome(
    operation: &str,
    succeeded: bool,
    message: impl FnOnce() -> String,
) -> Result<(), DelegationError> {
    if succeeded {
        return Ok(());
    }
    let message = message();
    tracing::warn!(operation, %message, "Resource store reported no change");
    Err(DelegationError::operation_failed(message))
}

impl<T> std::fmt::Debug for DelegationManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegationManager")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
