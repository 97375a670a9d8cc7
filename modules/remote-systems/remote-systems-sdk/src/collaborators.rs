//! Collaborator contracts consumed by the delegation layer.
//!
//! Implementations live outside the core: identity directories, data
//! stores, or the in-process reference implementations shipped with the
//! `remote_systems` module.

use async_trait::async_trait;

use crate::error::ResourceStoreError;
use crate::models::{AuthorizationRecord, CallerId, ResourceQuery, ResourceRef};

/// Maps a caller identifier to an authorization record.
#[async_trait]
pub trait AuthorizationResolver: Send + Sync {
    /// Look up the authorization record for `caller_id`.
    ///
    /// Returns `None` when no record exists. Absence is a valid result,
    /// not an error.
    async fn resolve(&self, caller_id: &CallerId) -> Option<AuthorizationRecord>;
}

/// Authorization-gated access to a collection of `T`.
///
/// Every call receives the authorization value the caller resolved,
/// which may be absent. The store decides whether that value is good
/// enough for the requested operation.
#[async_trait]
pub trait ResourceStore<T>: Send + Sync {
    /// Read the items matching `query`.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` if `auth` is absent, invalid or insufficient
    /// - `Unavailable` for backend failures
    async fn read(
        &self,
        auth: Option<&AuthorizationRecord>,
        query: &ResourceQuery,
    ) -> Result<Vec<T>, ResourceStoreError>;

    /// Update `item`, or insert it if it does not exist.
    ///
    /// Returns `false` when the item could not be stored.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` on insufficient rights
    /// - `Unavailable` for backend failures
    async fn upsert(
        &self,
        auth: Option<&AuthorizationRecord>,
        item: T,
    ) -> Result<bool, ResourceStoreError>;

    /// Remove the item keyed by `resource_ref`.
    ///
    /// Returns `false` when nothing was removed.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` on insufficient rights
    /// - `Unavailable` for backend failures
    async fn delete(
        &self,
        auth: Option<&AuthorizationRecord>,
        resource_ref: &ResourceRef,
    ) -> Result<bool, ResourceStoreError>;
}
