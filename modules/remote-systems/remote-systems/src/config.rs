//! Configuration for the `remote_systems` module.
//!
//! ```yaml
//! remote_systems:
//!   absent_authorization: forward
//!   resolver:
//!     records:
//!       - id: "1"
//!         first_name: German
//!         last_name: Jimenez
//!         location: Madrid
//!         roles: []
//!   store:
//!     capacity: 1024
//!     write_role: null
//! ```

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use remote_systems_sdk::AuthorizationRecord;
use serde::Deserialize;

/// Top-level key of the module section in a config file.
pub const CONFIG_SECTION: &str = "remote_systems";

/// Environment prefix for overrides, e.g. `REMOTE_SYSTEMS__STORE__CAPACITY=16`.
pub const ENV_PREFIX: &str = "REMOTE_SYSTEMS__";

/// Module configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSystemsConfig {
    /// What to do when the caller has no authorization record.
    pub absent_authorization: AbsentAuthorization,

    /// Records served by the static resolver.
    pub resolver: StaticResolverConfig,

    /// In-memory store settings.
    pub store: InMemoryStoreConfig,
}

/// Handling of callers the resolver knows nothing about.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AbsentAuthorization {
    /// Hand the absent record to the store and let it reject the call.
    #[default]
    Forward,
    /// Fail with a permissions error without calling the store.
    Reject,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticResolverConfig {
    pub records: Vec<AuthorizationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InMemoryStoreConfig {
    /// Maximum number of items; inserts beyond it report `false`.
    pub capacity: usize,

    /// Role required for upserts and deletes. `None` lets any valid record write.
    pub write_role: Option<String>,
}

impl Default for InMemoryStoreConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            write_role: None,
        }
    }
}

impl RemoteSystemsConfig {
    /// Load the `remote_systems` section from a YAML file, with
    /// `REMOTE_SYSTEMS__*` environment variables layered on top.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration does not deserialize.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let cfg: Self = Figment::from(Yaml::file(path))
            .focus(CONFIG_SECTION)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("invalid remote_systems config in {}", path.display()))?;

        tracing::debug!(
            records = cfg.resolver.records.len(),
            capacity = cfg.store.capacity,
            absent_authorization = ?cfg.absent_authorization,
            "Loaded remote_systems configuration"
        );
        Ok(cfg)
    }

    /// Deserialize an already extracted module section.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown fields or mistyped values.
    pub fn from_value(value: serde_json::Value) -> anyhow::Result<Self> {
        serde_json::from_value(value).context("invalid remote_systems config")
    }
}
