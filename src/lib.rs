//! SCM bootstrap for end-to-end UI test suites.
//!
//! `scmboot` runs before scenarios tagged for a source-control provider
//! (GitHub or Bitbucket Cloud). It resolves the remote repository URL and
//! personal access token from provider-specific environment variables
//! into a shared property store, generates a unique remote test branch
//! name when none is configured, and delegates branch creation to the
//! embedding suite through the [`hooks::RemoteBranchCreator`] seam.
//!
//! # Architecture
//!
//! All state flows through an explicitly passed [`props::PropertyStore`];
//! nothing here reads or writes ambient global state. Environment access
//! goes through `mockable::Env` so every path is testable without
//! touching the process environment, and provider differences live in the
//! [`provider::ScmProviderType`] dispatch table rather than per-provider
//! hook copies.
//!
//! # Modules
//!
//! - [`props`]: property store shared with the wider test framework
//! - [`provider`]: provider identity and per-provider dispatch table
//! - [`credentials`]: credential resolution from the environment
//! - [`hooks`]: before-scenario hooks and the branch-creation seam
//! - [`error`]: semantic error types for bootstrap operations

pub mod credentials;
pub mod error;
pub mod hooks;
pub mod props;
pub mod provider;
