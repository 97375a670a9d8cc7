//! Remote Systems Module
//!
//! Gates every operation on a remote-managed system behind an authorization
//! lookup: the caller id is resolved to an authorization record first, and
//! only then is the resource store asked to read, upsert or delete.
//!
//! ## Layout
//!
//! - `domain` - [`DelegationManager`] (the resolve-then-act protocol) and the
//!   local client exposing it as [`RemoteSystemsClient`]
//! - `infra` - in-process collaborators for development and tests
//!   ([`StaticAuthorizationResolver`], [`InMemoryResourceStore`])
//! - `config` - module configuration
//!
//! ## Public API
//!
//! Contracts and models live in `remote-systems-sdk` and are re-exported here.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use remote_systems_sdk::{
    AuthorizationRecord, AuthorizationResolver, CallerId, DelegationError, RemoteSystem,
    RemoteSystemsClient, ResourceQuery, ResourceRef, ResourceStore, ResourceStoreError,
};

pub mod config;
pub mod domain;
pub mod infra;

pub use config::{AbsentAuthorization, RemoteSystemsConfig};
pub use domain::{DelegationManager, DelegationOptions, RemoteSystemsLocalClient};
pub use infra::{InMemoryResourceStore, StaticAuthorizationResolver};

#[cfg(test)]
mod test_support;
