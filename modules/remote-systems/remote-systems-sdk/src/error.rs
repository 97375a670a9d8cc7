//! Error types for the `remote_systems` module.

use thiserror::Error;

/// Errors a [`ResourceStore`](crate::ResourceStore) may return.
///
/// A `false` outcome from a mutating call is not an error at this level;
/// it is reported through the returned `bool`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceStoreError {
    /// The supplied authorization is absent, invalid or insufficient.
    #[error("permission denied: {reason}")]
    PermissionDenied { reason: String },

    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ResourceStoreError {
    pub fn permission_denied(reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            reason: reason.into(),
        }
    }
}

/// The single error kind surfaced by the delegation layer.
///
/// Either wraps the collaborator failure that stopped the operation, or
/// describes a mutating operation whose store outcome was `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelegationError {
    /// The resource store refused or failed the operation.
    #[error("resource store rejected the operation: {0}")]
    Store(#[source] ResourceStoreError),

    /// The store accepted the call but reported that nothing was changed.
    #[error("{message}")]
    OperationFailed { message: String },
}

impl DelegationError {
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed {
            message: message.into(),
        }
    }

    /// Whether the underlying cause is a permissions failure.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::Store(ResourceStoreError::PermissionDenied { .. })
        )
    }
}

impl From<ResourceStoreError> for DelegationError {
    fn from(e: ResourceStoreError) -> Self {
        Self::Store(e)
    }
}
