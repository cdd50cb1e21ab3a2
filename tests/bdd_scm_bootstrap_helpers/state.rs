//! Shared behavioural-test state for SCM bootstrap scenarios.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use scmboot::props::PropertyStore;
use scmboot::provider::ScmProviderType;

/// Step result type for SCM bootstrap BDD tests.
pub type StepResult<T> = Result<T, String>;

/// Thread-safe key→value map shared between steps.
pub(crate) type SharedMap = Arc<Mutex<HashMap<String, String>>>;

/// How the mocked branch-creation collaborator behaves.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum CreatorBehaviour {
    /// Branch creation succeeds.
    Succeed,
    /// Branch creation fails with a version-control API error.
    FailApi,
    /// Branch creation fails with an I/O error.
    FailIo,
}

/// Categorized failure outcomes for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    /// The provider's API rejected the operation.
    Api,
    /// An I/O error occurred while talking to the remote.
    Io,
}

/// High-level outcome observed after running the before-scenario hook.
#[derive(Clone)]
pub(crate) enum BootstrapOutcome {
    /// The hook completed and the store was populated.
    Success,
    /// The hook aborted with a classified failure.
    Failed {
        /// The failure category.
        kind: FailureKind,
        /// Human-readable error message.
        message: String,
    },
}

/// Shared scenario state for SCM bootstrap behavioural tests.
#[derive(Default, ScenarioState)]
pub struct ScmBootstrapState {
    /// The environment variables to mock.
    pub(crate) env_vars: Slot<SharedMap>,

    /// Properties seeded into the store before the hook runs.
    pub(crate) seeded_props: Slot<SharedMap>,

    /// How the mocked branch-creation collaborator should behave.
    pub(crate) creator_behaviour: Slot<CreatorBehaviour>,

    /// Outcome of the most recent hook run.
    pub(crate) outcome: Slot<BootstrapOutcome>,

    /// Snapshot of the property store after the hook run(s).
    pub(crate) final_store: Slot<PropertyStore>,

    /// Branch name observed after each successful hook run.
    pub(crate) branch_history: Slot<Vec<String>>,

    /// Number of times the mocked collaborator was invoked.
    pub(crate) creator_calls: Slot<usize>,

    /// Provider the mocked collaborator was last invoked with.
    pub(crate) observed_provider: Slot<ScmProviderType>,
}

/// Fixture providing fresh state for each SCM bootstrap scenario.
#[fixture]
pub fn scm_bootstrap_state() -> ScmBootstrapState {
    let state = ScmBootstrapState::default();
    state.env_vars.set(Arc::new(Mutex::new(HashMap::new())));
    state.seeded_props.set(Arc::new(Mutex::new(HashMap::new())));
    state.creator_behaviour.set(CreatorBehaviour::Succeed);
    state.creator_calls.set(0);
    state
}
