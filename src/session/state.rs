//! The draft-publish state machine.

use crate::errors::{SessionError, SessionResult};
use std::fmt::{self, Display};

/// Where a session stands in the draft-publish workflow.
///
/// Transitions are computed before the remote call that causes them, so a precondition
/// failure is reported without any request being made. The new state is only adopted once
/// the call succeeds.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub enum DraftState {
    /// Editing the default branch directly.
    #[default]
    Clean,
    /// A draft branch exists and is checked out.
    DraftInProgress { branch: String },
    /// A draft branch with a known open pull request.
    PrOpen { branch: String, number: u64 },
}

impl DraftState {
    /// Creates the state for a session opened on `branch`.
    pub fn on_branch(branch: &str, default_branch: &str) -> Self {
        if branch == default_branch {
            Self::Clean
        } else {
            Self::DraftInProgress {
                branch: branch.to_string(),
            }
        }
    }

    /// The checked out branch.
    pub fn branch<'a>(&'a self, default_branch: &'a str) -> &'a str {
        match self {
            Self::Clean => default_branch,
            Self::DraftInProgress { branch } | Self::PrOpen { branch, .. } => branch,
        }
    }

    /// Returns whether a draft branch is checked out.
    pub fn is_drafting(&self) -> bool {
        !matches!(self, Self::Clean)
    }

    /// The known pull request number, if any.
    pub fn pr_number(&self) -> Option<u64> {
        match self {
            Self::PrOpen { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// A draft branch was created from the default branch.
    pub fn draft_created(&self, branch: String) -> SessionResult<Self> {
        match self {
            Self::Clean => Ok(Self::DraftInProgress { branch }),
            _ => Err(self.invalid("create a draft branch")),
        }
    }

    /// A pull request was opened, or found, for the draft branch.
    pub fn pr_opened(&self, number: u64) -> SessionResult<Self> {
        match self {
            Self::DraftInProgress { branch } | Self::PrOpen { branch, .. } => Ok(Self::PrOpen {
                branch: branch.clone(),
                number,
            }),
            Self::Clean => Err(self.invalid("open a pull request")),
        }
    }

    /// The pull request was merged. The branch remains until it is deleted.
    pub fn pr_merged(&self) -> SessionResult<Self> {
        match self {
            Self::PrOpen { branch, .. } => Ok(Self::DraftInProgress {
                branch: branch.clone(),
            }),
            _ => Err(SessionError::PrUnavailable),
        }
    }

    /// The draft branch was deleted, returning the session to the default branch.
    pub fn branch_deleted(&self) -> SessionResult<Self> {
        match self {
            Self::Clean => Err(SessionError::CannotDeleteDefaultBranch),
            _ => Ok(Self::Clean),
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            state: self.to_string(),
            action,
        }
    }
}

impl Display for DraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::DraftInProgress { branch } => write!(f, "drafting on `{}`", branch),
            Self::PrOpen { branch, number } => {
                write!(f, "drafting on `{}` with pull request #{}", branch, number)
            }
        }
    }
}
