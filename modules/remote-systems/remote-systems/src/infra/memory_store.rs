//! In-memory resource store with a simple role check.
//!
//! ## Policy
//!
//! - An absent authorization record is refused.
//! - A record without a role payload is refused.
//! - A read of a single resource that does not exist is refused, the same
//!   way an unknown remote system is refused by a real backend.
//! - Upserts and deletes require `write_role`, when one is configured.
//! - An upsert that would grow the store past `capacity` returns `false`.
//! - A delete of a missing resource returns `false`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use remote_systems_sdk::{
    AuthorizationRecord, Resource, ResourceQuery, ResourceRef, ResourceStore, ResourceStoreError,
};

use crate::config::InMemoryStoreConfig;

pub struct InMemoryResourceStore<T> {
    items: RwLock<BTreeMap<ResourceRef, T>>,
    capacity: usize,
    write_role: Option<String>,
}

impl<T: Resource> Default for InMemoryResourceStore<T> {
    fn default() -> Self {
        Self::from_config(&InMemoryStoreConfig::default())
    }
}

impl<T: Resource> InMemoryResourceStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(cfg: &InMemoryStoreConfig) -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            capacity: cfg.capacity,
            write_role: cfg.write_role.clone(),
        }
    }

    /// Seed items directly, bypassing authorization.
    #[must_use]
    pub fn with_items(self, items: impl IntoIterator<Item = T>) -> Self {
        {
            let mut guard = self.items.write();
            for item in items {
                guard.insert(item.resource_ref().clone(), item);
            }
        }
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    #[must_use]
    pub fn contains(&self, resource_ref: &ResourceRef) -> bool {
        self.items.read().contains_key(resource_ref)
    }

    fn check_valid(
        auth: Option<&AuthorizationRecord>,
    ) -> Result<&AuthorizationRecord, ResourceStoreError> {
        let record =
            auth.ok_or_else(|| ResourceStoreError::permission_denied("no authorization record"))?;
        if record.roles().is_none() {
            return Err(ResourceStoreError::permission_denied(format!(
                "authorization record '{}' carries no roles",
                record.id()
            )));
        }
        Ok(record)
    }

    fn check_write(&self, auth: Option<&AuthorizationRecord>) -> Result<(), ResourceStoreError> {
        let record = Self::check_valid(auth)?;
        match &self.write_role {
            Some(role) if !record.has_role(role) => Err(ResourceStoreError::permission_denied(
                format!("caller '{}' lacks role '{role}'", record.id()),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for InMemoryResourceStore<T> {
    async fn read(
        &self,
        auth: Option<&AuthorizationRecord>,
        query: &ResourceQuery,
    ) -> Result<Vec<T>, ResourceStoreError> {
        Self::check_valid(auth)?;

        let guard = self.items.read();
        if let ResourceQuery::ById(id) = query
            && !guard.contains_key(id)
        {
            return Err(ResourceStoreError::permission_denied(format!(
                "resource '{id}' is not visible"
            )));
        }

        Ok(guard
            .iter()
            .filter(|(key, _)| query.matches(key))
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn upsert(
        &self,
        auth: Option<&AuthorizationRecord>,
        item: T,
    ) -> Result<bool, ResourceStoreError> {
        self.check_write(auth)?;

        let mut guard = self.items.write();
        let key = item.resource_ref().clone();
        if !guard.contains_key(&key) && guard.len() >= self.capacity {
            tracing::debug!(resource_ref = %key, capacity = self.capacity, "Store is full");
            return Ok(false);
        }
        guard.insert(key, item);
        Ok(true)
    }

    async fn delete(
        &self,
        auth: Option<&AuthorizationRecord>,
        resource_ref: &ResourceRef,
    ) -> Result<bool, ResourceStoreError> {
        self.check_write(auth)?;

        Ok(self.items.write().remove(resource_ref).is_some())
    }
}

impl<T> std::fmt::Debug for InMemoryResourceStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryResourceStore")
            .field("len", &self.items.read().len())
            .field("capacity", &self.capacity)
            .field("write_role", &self.write_role)
            .finish()
    }
}
