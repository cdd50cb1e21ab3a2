//! Credential resolution from the process environment into the property
//! store.
//!
//! The resolver copies the remote repository URL and personal access token
//! from named environment variables into their fixed property keys, and
//! generates a unique remote test branch name when none is configured yet.
//! Environment access goes through the `mockable::Env` trait so tests can
//! exercise every path without touching the real process environment.

use uuid::Uuid;

use crate::props::{GIT_BRANCH_PROP, GIT_PAT_PROP, GIT_REPO_URL_PROP, PropertyStore};

/// Prefix for generated remote test branch names.
pub const BRANCH_PREFIX: &str = "cdf-e2e-test-";

/// Resolves SCM credentials from environment variables.
///
/// # Type Parameters
///
/// * `E` - An environment provider implementing the `mockable::Env` trait,
///   allowing for testable environment variable access.
///
/// # Example
///
/// ```ignore
/// use mockable::DefaultEnv;
/// use scmboot::credentials::CredentialResolver;
/// use scmboot::props::PropertyStore;
///
/// let env = DefaultEnv::new();
/// let resolver = CredentialResolver::new(&env);
/// let mut store = PropertyStore::new();
/// resolver.setup_scm_credentials(&mut store, "SCM_TEST_REPO_URL", "SCM_TEST_REPO_PAT");
/// ```
pub struct CredentialResolver<'a, E: mockable::Env> {
    env: &'a E,
}

impl<'a, E: mockable::Env> CredentialResolver<'a, E> {
    /// Creates a new credential resolver with the given environment provider.
    #[must_use]
    pub const fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// Populates the property store from the named environment variables.
    ///
    /// - `repo_url_var`, if present and non-empty in the environment, is
    ///   written under [`GIT_REPO_URL_PROP`]; otherwise the prior value
    ///   (if any) is left untouched.
    /// - `repo_pat_var` is handled the same way under [`GIT_PAT_PROP`].
    /// - If [`GIT_BRANCH_PROP`] is absent or empty, a fresh branch name of
    ///   the form `cdf-e2e-test-<uuid>` is generated and stored. A branch
    ///   name set by an earlier call (or seeded by the suite) is never
    ///   overwritten.
    ///
    /// Missing environment variables are a silent no-op, not a failure.
    pub fn setup_scm_credentials(
        &self,
        store: &mut PropertyStore,
        repo_url_var: &str,
        repo_pat_var: &str,
    ) {
        if let Some(repo_url) = self.lookup(repo_url_var) {
            store.set(GIT_REPO_URL_PROP, repo_url);
        }

        if let Some(pat) = self.lookup(repo_pat_var) {
            store.set(GIT_PAT_PROP, pat);
        }

        if store.get_nonempty(GIT_BRANCH_PROP).is_none() {
            let branch_name = format!("{BRANCH_PREFIX}{}", Uuid::new_v4());
            store.set(GIT_BRANCH_PROP, branch_name);
        }
    }

    /// Looks up an environment variable, treating an empty value as unset.
    fn lookup(&self, var_name: &str) -> Option<String> {
        self.env
            .string(var_name)
            .filter(|value| !value.is_empty())
    }
}
