//! Public API trait for the `remote_systems` module.

use async_trait::async_trait;

use crate::error::DelegationError;
use crate::models::{CallerId, RemoteSystem, ResourceRef};

/// Public API trait for managing remote systems on behalf of a caller.
///
/// Every operation resolves the caller's authorization first and only
/// then touches the underlying store:
///
/// ```ignore
/// let client: Arc<dyn RemoteSystemsClient> = module.client();
///
/// client.start(&caller, &"12345".into()).await?;
/// ```
#[async_trait]
pub trait RemoteSystemsClient: Send + Sync {
    /// Start the remote system `remote_id`.
    ///
    /// # Errors
    ///
    /// `DelegationError` if the store rejects the caller.
    async fn start(
        &self,
        caller_id: &CallerId,
        remote_id: &ResourceRef,
    ) -> Result<(), DelegationError>;

    /// Stop the remote system `remote_id`.
    ///
    /// # Errors
    ///
    /// `DelegationError` if the store rejects the caller.
    async fn stop(
        &self,
        caller_id: &CallerId,
        remote_id: &ResourceRef,
    ) -> Result<(), DelegationError>;

    /// Register or update a remote system.
    ///
    /// # Errors
    ///
    /// `DelegationError` if the store rejects the caller or stores nothing.
    async fn add(&self, caller_id: &CallerId, remote: RemoteSystem) -> Result<(), DelegationError>;

    /// Remove the remote system `remote_id`.
    ///
    /// # Errors
    ///
    /// `DelegationError` if the store rejects the caller or removes nothing.
    async fn delete(
        &self,
        caller_id: &CallerId,
        remote_id: &ResourceRef,
    ) -> Result<(), DelegationError>;
}
