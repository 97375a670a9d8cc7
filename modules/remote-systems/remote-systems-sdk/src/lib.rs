#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Remote Systems SDK
//!
//! This crate provides the public contracts for the `remote_systems` module:
//!
//! - [`RemoteSystemsClient`] - Public API trait for consumers
//! - [`AuthorizationResolver`] - Collaborator contract: caller id → authorization record
//! - [`ResourceStore`] - Collaborator contract: authorization-gated data access
//! - [`AuthorizationRecord`], [`ResourceRef`], [`ResourceQuery`] - Models
//! - [`DelegationError`], [`ResourceStoreError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use remote_systems_sdk::{RemoteSystem, RemoteSystemsClient};
//!
//! let client: Arc<dyn RemoteSystemsClient> = /* local client from the module */;
//!
//! client.start(&"1".into(), &"12345".into()).await?;
//! client.add(&"1".into(), RemoteSystem::new("12345", "billing")).await?;
//! ```

pub mod api;
pub mod collaborators;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::RemoteSystemsClient;
pub use collaborators::{AuthorizationResolver, ResourceStore};
pub use error::{DelegationError, ResourceStoreError};
pub use models::{
    AuthorizationRecord, AuthorizationRecordBuilder, CallerId, Ingredient, MenuItem, RemoteSystem,
    Resource, ResourceQuery, ResourceRef,
};
