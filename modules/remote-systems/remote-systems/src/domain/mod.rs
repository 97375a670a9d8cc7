//! Domain layer for the `remote_systems` module.
//!
//! ## Protocol
//!
//! Every public operation runs the same two steps, strictly in order:
//! 1. Resolve the caller id through the injected `AuthorizationResolver`
//!    (exactly once, always first).
//! 2. Call the injected `ResourceStore` with the resolved record (or its
//!    absence) and the operation parameters.
//!
//! Store failures and `false` outcomes of mutating calls surface as
//! `DelegationError`; callers never see the store's own error type.

pub mod local_client;
pub mod service;

pub use local_client::RemoteSystemsLocalClient;
pub use service::{DelegationManager, DelegationOptions};

pub(crate) mod actions {
    pub const START: &str = "start";
    pub const STOP: &str = "stop";
    pub const ADD: &str = "add";
    pub const DELETE: &str = "delete";
}
