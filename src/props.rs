//! Property store shared with the wider test framework.
//!
//! The store is an explicit key→string configuration context: every
//! operation that reads or writes test properties receives it as an
//! argument rather than reaching for ambient global state. The embedding
//! suite owns the store's lifecycle and hands it to the plugin
//! configuration layer once the bootstrap hooks have populated it, so the
//! type derives serde for that handoff.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Property key recording which SCM provider the scenario runs against.
pub const SCM_PROVIDER_PROP: &str = "scmProviderType";

/// Property key for the remote Git repository URL.
pub const GIT_REPO_URL_PROP: &str = "gitRepoUrl";

/// Property key for the Git personal access token.
pub const GIT_PAT_PROP: &str = "gitPat";

/// Property key for the remote test branch name.
pub const GIT_BRANCH_PROP: &str = "gitBranch";

/// Mutable key→string property bag consumed by the test framework.
///
/// Keys are unique; insertion order is irrelevant. An empty string value
/// is treated as absent by [`get_nonempty`](Self::get_nonempty), matching
/// how the bootstrap layer decides whether a property still needs to be
/// populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyStore {
    properties: HashMap<String, String>,
}

impl PropertyStore {
    /// Creates an empty property store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the value stored under `key`, treating an empty string as
    /// absent.
    #[must_use]
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Returns the number of properties in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns whether the store holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over the stored key/value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, String, S>> for PropertyStore {
    fn from(properties: HashMap<String, String, S>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }
}

impl FromIterator<(String, String)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
