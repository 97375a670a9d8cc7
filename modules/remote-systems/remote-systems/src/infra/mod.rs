//! In-process collaborators for development and testing.

pub mod memory_store;
pub mod static_resolver;

pub use memory_store::InMemoryResourceStore;
pub use static_resolver::StaticAuthorizationResolver;
