//! Error types for flake8-diff.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for flake8-diff operations.
#[derive(Error, Debug)]
pub enum LintDiffError {
    /// The configured VCS name is not in the registry.
    #[error(
        "VCS '{0}' is not supported (supported: {supported})",
        supported = crate::vcs::SUPPORTED_VCS.join(", ")
    )]
    UnsupportedVcs(String),

    /// No registered VCS reports itself as active in the current directory.
    #[error("could not locate a supported VCS in the current directory")]
    NotLocatableVcs,

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A VCS command failed.
    #[error("VCS operation failed: {0}")]
    VcsError(String),

    /// The linter could not be run or exited abnormally.
    #[error("Linter failed: {0}")]
    LinterError(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintDiffError::UnsupportedVcs(_) => exit_codes::USER_ERROR,
            LintDiffError::NotLocatableVcs => exit_codes::USER_ERROR,
            LintDiffError::UserError(_) => exit_codes::USER_ERROR,
            LintDiffError::VcsError(_) => exit_codes::VCS_FAILURE,
            LintDiffError::LinterError(_) => exit_codes::LINTER_FAILURE,
            LintDiffError::Io(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for flake8-diff operations.
pub type Result<T> = std::result::Result<T, LintDiffError>;
