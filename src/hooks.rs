//! Before-scenario hooks for provider-tagged test scenarios.
//!
//! A hook runs once per tagged scenario, before its steps: it records the
//! active provider in the property store, resolves credentials from the
//! provider's environment variables, then asks the external collaborator
//! to create the remote test branch. One parameterized function serves
//! every provider, driven by the [`ScmProviderType`] dispatch table.

use log::info;

use crate::credentials::CredentialResolver;
use crate::error::Result;
use crate::props::{PropertyStore, SCM_PROVIDER_PROP};
use crate::provider::ScmProviderType;

/// Fixed relative position of the SCM hooks among before-scenario hooks.
pub const HOOK_ORDER: u8 = 1;

/// External collaborator that creates the remote test branch.
///
/// Implementations read the repository URL, access token, and branch name
/// from the populated [`PropertyStore`] and perform the actual remote
/// operation. The library ships no network implementation; the embedding
/// suite provides one, and tests substitute a mock.
pub trait RemoteBranchCreator {
    /// Creates a remote branch on the given provider using the store's
    /// populated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BranchError::Api`] when the provider's API
    /// rejects the operation, or [`crate::error::BranchError::Io`] on a
    /// network or filesystem failure.
    fn create_remote_branch(
        &self,
        provider: ScmProviderType,
        store: &PropertyStore,
    ) -> Result<()>;
}

/// Runs the before-scenario bootstrap for one provider.
///
/// In order: logs the active provider, unconditionally records the
/// provider-type property, resolves credentials from the provider's
/// environment variables, and delegates branch creation to `creator`.
///
/// # Errors
///
/// Propagates the collaborator's error unmodified; credential resolution
/// itself cannot fail. An error aborts the scenario's before phase.
pub fn run_before_scenario<E: mockable::Env>(
    provider: ScmProviderType,
    env: &E,
    store: &mut PropertyStore,
    creator: &dyn RemoteBranchCreator,
) -> Result<()> {
    info!("----------------- Using {provider} for SCM ------------------");
    store.set(SCM_PROVIDER_PROP, provider.property_value());

    let resolver = CredentialResolver::new(env);
    resolver.setup_scm_credentials(store, provider.repo_url_var(), provider.repo_pat_var());

    creator.create_remote_branch(provider, store)
}

/// Descriptor binding a provider's before-hook to its scenario tag.
///
/// The embedding runner registers each descriptor's [`run`](Self::run)
/// callback against [`tag`](Self::tag) at position [`order`](Self::order)
/// in its before-scenario phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScmBeforeHook {
    provider: ScmProviderType,
}

impl ScmBeforeHook {
    /// Creates the hook descriptor for a provider.
    #[must_use]
    pub const fn new(provider: ScmProviderType) -> Self {
        Self { provider }
    }

    /// The provider this hook bootstraps.
    #[must_use]
    pub const fn provider(self) -> ScmProviderType {
        self.provider
    }

    /// The scenario tag this hook is registered against.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.provider.scenario_tag()
    }

    /// The hook's relative ordering position among before-scenario hooks.
    #[must_use]
    pub const fn order(self) -> u8 {
        HOOK_ORDER
    }

    /// Runs the bootstrap for this hook's provider.
    ///
    /// # Errors
    ///
    /// Propagates the branch-creation collaborator's error unmodified.
    pub fn run<E: mockable::Env>(
        self,
        env: &E,
        store: &mut PropertyStore,
        creator: &dyn RemoteBranchCreator,
    ) -> Result<()> {
        run_before_scenario(self.provider, env, store, creator)
    }
}

/// The before-scenario hooks for every supported provider, in
/// registration order.
#[must_use]
pub fn scm_before_hooks() -> [ScmBeforeHook; 2] {
    ScmProviderType::ALL.map(ScmBeforeHook::new)
}
