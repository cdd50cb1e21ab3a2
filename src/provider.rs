//! SCM provider identity and the per-provider dispatch table.
//!
//! Each provider variant carries everything that differs between
//! providers: the property value recorded in the store, the environment
//! variable names the credential resolver consults, and the scenario tag
//! the runner binds the before-hook to. Adding a provider means adding a
//! variant and extending these tables; the hook logic itself is shared.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The SCM provider a tagged scenario runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScmProviderType {
    /// `GitHub` (github.com or GitHub Enterprise).
    Github,
    /// Bitbucket Cloud (bitbucket.org).
    BitbucketCloud,
}

impl ScmProviderType {
    /// Every supported provider, in registration order.
    pub const ALL: [Self; 2] = [Self::Github, Self::BitbucketCloud];

    /// The literal written under the provider-type property key.
    #[must_use]
    pub const fn property_value(self) -> &'static str {
        match self {
            Self::Github => "GITHUB",
            Self::BitbucketCloud => "BITBUCKET_CLOUD",
        }
    }

    /// Name of the environment variable holding the remote repository URL.
    #[must_use]
    pub const fn repo_url_var(self) -> &'static str {
        match self {
            Self::Github => "SCM_TEST_REPO_URL",
            Self::BitbucketCloud => "SCM_TEST_REPO_URL_BITBUCKET",
        }
    }

    /// Name of the environment variable holding the personal access token.
    #[must_use]
    pub const fn repo_pat_var(self) -> &'static str {
        match self {
            Self::Github => "SCM_TEST_REPO_PAT",
            Self::BitbucketCloud => "SCM_TEST_REPO_PAT_BITBUCKET",
        }
    }

    /// The scenario tag that triggers this provider's before-hook.
    #[must_use]
    pub const fn scenario_tag(self) -> &'static str {
        match self {
            Self::Github => "@SCM_GITHUB_TEST",
            Self::BitbucketCloud => "@SCM_BITBUCKET_TEST",
        }
    }

    /// Human-readable provider name for log output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::BitbucketCloud => "Bitbucket Cloud",
        }
    }
}

impl fmt::Display for ScmProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
