//! Semantic error types for SCM bootstrap operations.
//!
//! Only the external branch-creation collaborator can fail: missing or
//! empty environment variables are a silent no-op during credential
//! resolution, never an error. Collaborator failures are propagated
//! unmodified out of the before-hook so the scenario runner can mark the
//! scenario as errored before its steps execute.

use thiserror::Error;

use crate::provider::ScmProviderType;

/// Errors raised by the remote branch-creation collaborator.
#[derive(Debug, Error)]
pub enum BranchError {
    /// The provider's version-control API rejected the operation, for
    /// example an authentication failure or a refused branch creation.
    #[error("{provider} API rejected remote branch creation: {message}")]
    Api {
        /// The provider whose API reported the failure.
        provider: ScmProviderType,
        /// A description of the API failure.
        message: String,
    },

    /// A network or filesystem I/O failure while talking to the remote.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialised `Result` type for SCM bootstrap operations.
pub type Result<T> = std::result::Result<T, BranchError>;
