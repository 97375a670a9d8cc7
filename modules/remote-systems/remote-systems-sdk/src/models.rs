//! Domain models for the `remote_systems` module.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque identifier of the caller requesting an operation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CallerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CallerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque key of a remote-managed resource.
///
/// No structure is imposed; the store decides how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceRef {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ResourceRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filter handed to [`ResourceStore::read`](crate::ResourceStore::read).
///
/// Displays as the text form stores interpret: `where id=<ref>` for a
/// single resource and an empty string for an unfiltered read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceQuery {
    /// No filter: every item in the collection.
    All,
    /// A single resource by key.
    ById(ResourceRef),
}

impl ResourceQuery {
    #[must_use]
    pub fn by_id(resource_ref: &ResourceRef) -> Self {
        Self::ById(resource_ref.clone())
    }

    /// Whether `item_ref` passes this filter.
    #[must_use]
    pub fn matches(&self, item_ref: &ResourceRef) -> bool {
        match self {
            Self::All => true,
            Self::ById(id) => id == item_ref,
        }
    }
}

impl fmt::Display for ResourceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => Ok(()),
            Self::ById(id) => write!(f, "where id={id}"),
        }
    }
}

/// Identity and role bundle returned by an
/// [`AuthorizationResolver`](crate::AuthorizationResolver).
///
/// Immutable once built. The delegation layer never inspects the role
/// payload; it forwards the whole record to the resource store, which
/// decides what the roles allow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRecord {
    id: CallerId,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    location: String,
    /// `None` means the record carries no role payload at all, which stores
    /// treat as an invalid record. `Some(vec![])` is a valid, role-less record.
    #[serde(default)]
    roles: Option<Vec<String>>,
}

impl AuthorizationRecord {
    /// Create a new `AuthorizationRecord` builder
    pub fn builder(id: impl Into<CallerId>) -> AuthorizationRecordBuilder {
        AuthorizationRecordBuilder {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            location: String::new(),
            roles: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CallerId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Role payload, if the record carries one.
    #[must_use]
    pub fn roles(&self) -> Option<&[String]> {
        self.roles.as_deref()
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles().is_some_and(|roles| roles.iter().any(|r| r == role))
    }
}

pub struct AuthorizationRecordBuilder {
    id: CallerId,
    first_name: String,
    last_name: String,
    location: String,
    roles: Option<Vec<String>>,
}

impl AuthorizationRecordBuilder {
    #[must_use]
    pub fn first_name(mut self, first_name: &str) -> Self {
        first_name.clone_into(&mut self.first_name);
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: &str) -> Self {
        last_name.clone_into(&mut self.last_name);
        self
    }

    #[must_use]
    pub fn location(mut self, location: &str) -> Self {
        location.clone_into(&mut self.location);
        self
    }

    #[must_use]
    pub fn roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }

    #[must_use]
    pub fn build(self) -> AuthorizationRecord {
        AuthorizationRecord {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            location: self.location,
            roles: self.roles,
        }
    }
}

/// Items kept by a [`ResourceStore`](crate::ResourceStore) expose their key.
pub trait Resource: Clone + Send + Sync + 'static {
    fn resource_ref(&self) -> &ResourceRef;
}

/// A remote-managed system that can be started, stopped, registered and removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSystem {
    pub id: ResourceRef,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl RemoteSystem {
    pub fn new(id: impl Into<ResourceRef>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            endpoint: None,
            properties: BTreeMap::new(),
        }
    }
}

impl Resource for RemoteSystem {
    fn resource_ref(&self) -> &ResourceRef {
        &self.id
    }
}

/// Ingredient reference held by a [`MenuItem`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

/// Menu catalog entry, stored in the `menu` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ResourceRef,
    #[serde(rename = "itemName")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: BTreeSet<Ingredient>,
    pub cost: Decimal,
    pub minutes_to_prepare: u32,
}

impl Resource for MenuItem {
    fn resource_ref(&self) -> &ResourceRef {
        &self.id
    }
}
