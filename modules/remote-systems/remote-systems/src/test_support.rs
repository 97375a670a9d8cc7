#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use remote_systems_sdk::{
    AuthorizationRecord, AuthorizationResolver, CallerId, RemoteSystem, ResourceQuery,
    ResourceRef, ResourceStore, ResourceStoreError,
};

use crate::domain::{DelegationManager, DelegationOptions};

pub const VALID_CALLER: &str = "1";
pub const UNKNOWN_CALLER: &str = "2";
pub const VALID_REMOTE: &str = "12345";
pub const INVALID_REMOTE: &str = "54321";

/// Every collaborator call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Resolve(CallerId),
    Read {
        auth: Option<AuthorizationRecord>,
        query: String,
    },
    Upsert {
        auth: Option<AuthorizationRecord>,
        item: ResourceRef,
    },
    Delete {
        auth: Option<AuthorizationRecord>,
        resource_ref: ResourceRef,
    },
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn store_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, Call::Resolve(_)))
            .count()
    }
}

#[must_use]
pub fn valid_record() -> AuthorizationRecord {
    AuthorizationRecord::builder(VALID_CALLER)
        .first_name("German")
        .last_name("Jimenez")
        .location("Madrid")
        .roles(vec![])
        .build()
}

/// Resolver that knows only [`valid_record`] and logs each lookup.
pub struct RecordingResolver {
    log: CallLog,
    records: HashMap<CallerId, AuthorizationRecord>,
}

impl RecordingResolver {
    pub fn new(log: CallLog) -> Self {
        let record = valid_record();
        Self {
            log,
            records: HashMap::from([(record.id().clone(), record)]),
        }
    }
}

#[async_trait]
impl AuthorizationResolver for RecordingResolver {
    async fn resolve(&self, caller_id: &CallerId) -> Option<AuthorizationRecord> {
        self.log.push(Call::Resolve(caller_id.clone()));
        self.records.get(caller_id).cloned()
    }
}

/// Store with scripted answers that logs each call.
///
/// - absent auth → `PermissionDenied` on every operation
/// - reads of refs in `hidden` → `PermissionDenied`
/// - upsert/delete → `upsert_outcome` / `delete_outcome`
pub struct RecordingStore {
    log: CallLog,
    hidden: HashSet<ResourceRef>,
    pub upsert_outcome: bool,
    pub delete_outcome: bool,
}

impl RecordingStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            hidden: HashSet::from([ResourceRef::from(INVALID_REMOTE)]),
            upsert_outcome: true,
            delete_outcome: true,
        }
    }

    fn require(auth: Option<&AuthorizationRecord>) -> Result<(), ResourceStoreError> {
        auth.map(|_| ())
            .ok_or_else(|| ResourceStoreError::permission_denied("no authorization record"))
    }
}

#[async_trait]
impl ResourceStore<RemoteSystem> for RecordingStore {
    async fn read(
        &self,
        auth: Option<&AuthorizationRecord>,
        query: &ResourceQuery,
    ) -> Result<Vec<RemoteSystem>, ResourceStoreError> {
        self.log.push(Call::Read {
            auth: auth.cloned(),
            query: query.to_string(),
        });
        Self::require(auth)?;
        match query {
            ResourceQuery::ById(id) if self.hidden.contains(id) => Err(
                ResourceStoreError::permission_denied(format!("resource '{id}' is not visible")),
            ),
            ResourceQuery::ById(id) => Ok(vec![RemoteSystem::new(id.clone(), "remote")]),
            ResourceQuery::All => Ok(Vec::new()),
        }
    }

    async fn upsert(
        &self,
        auth: Option<&AuthorizationRecord>,
        item: RemoteSystem,
    ) -> Result<bool, ResourceStoreError> {
        self.log.push(Call::Upsert {
            auth: auth.cloned(),
            item: item.id.clone(),
        });
        Self::require(auth)?;
        Ok(self.upsert_outcome)
    }

    async fn delete(
        &self,
        auth: Option<&AuthorizationRecord>,
        resource_ref: &ResourceRef,
    ) -> Result<bool, ResourceStoreError> {
        self.log.push(Call::Delete {
            auth: auth.cloned(),
            resource_ref: resource_ref.clone(),
        });
        Self::require(auth)?;
        Ok(self.delete_outcome)
    }
}

/// Store that fails every call as unavailable.
pub struct UnavailableStore;

#[async_trait]
impl ResourceStore<RemoteSystem> for UnavailableStore {
    async fn read(
        &self,
        _auth: Option<&AuthorizationRecord>,
        _query: &ResourceQuery,
    ) -> Result<Vec<RemoteSystem>, ResourceStoreError> {
        Err(ResourceStoreError::Unavailable("connection refused".to_owned()))
    }

    async fn upsert(
        &self,
        _auth: Option<&AuthorizationRecord>,
        _item: RemoteSystem,
    ) -> Result<bool, ResourceStoreError> {
        Err(ResourceStoreError::Unavailable("connection refused".to_owned()))
    }

    async fn delete(
        &self,
        _auth: Option<&AuthorizationRecord>,
        _resource_ref: &ResourceRef,
    ) -> Result<bool, ResourceStoreError> {
        Err(ResourceStoreError::Unavailable("connection refused".to_owned()))
    }
}

pub fn build_manager(log: &CallLog) -> DelegationManager<RemoteSystem> {
    build_manager_with(log, RecordingStore::new(log.clone()), DelegationOptions::default())
}

pub fn build_manager_with(
    log: &CallLog,
    store: RecordingStore,
    options: DelegationOptions,
) -> DelegationManager<RemoteSystem> {
    let resolver: Arc<dyn AuthorizationResolver> = Arc::new(RecordingResolver::new(log.clone()));
    let store: Arc<dyn ResourceStore<RemoteSystem>> = Arc::new(store);
    DelegationManager::new(resolver, store).with_options(options)
}
