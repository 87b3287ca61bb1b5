//! Error types for the `sitedraft` application.

use crate::remote::RemoteRequest;
use nu_ansi_term::Color;
use serde::Serialize;
use thiserror::Error;

/// The body of a content write, kept on a failed commit so it can be retried verbatim.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CommitRequest {
    /// Repository path of the file being written.
    pub path: String,
    /// The commit message.
    pub message: String,
    /// Base64-encoded file content.
    pub content: String,
    /// The branch the commit lands on.
    pub branch: String,
    /// The blob SHA the write expects to replace, if the file already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// A content write that the remote store rejected.
#[derive(Error, Debug)]
#[error("Commit of `{}` to `{}` failed with status {}.", .request.path, .request.branch, .status)]
pub struct CommitError {
    /// The request as it was sent.
    pub request: CommitRequest,
    /// The HTTP status of the response.
    pub status: u16,
}

#[derive(Error, Debug)]
pub enum SessionError {
    /// A required credential or identity is missing.
    #[error("Missing configuration: {}", .0)]
    Configuration(String),
    /// A payload was not valid base64, or did not decode to UTF-8.
    #[error("Failed to decode base64 payload: {}", .0)]
    Decoding(String),
    /// The remote API answered with a non-2xx status.
    #[error("{} {} failed with status {}.", .request.method, .request.route(), .status)]
    RemoteRequest {
        status: u16,
        request: Box<RemoteRequest>,
    },
    /// A content write was rejected.
    #[error(transparent)]
    Commit(#[from] CommitError),
    /// A draft branch was requested before the default branch's commit SHA was known.
    #[error("No SHA available for the default branch. Fetch drafts first.")]
    NoShaAvailable,
    /// A merge was requested without a known pull request.
    #[error("Pull request not available.")]
    PrUnavailable,
    /// The session is on the default branch, which is never deleted.
    #[error("Unable to delete the default branch.")]
    CannotDeleteDefaultBranch,
    /// A workflow step was attempted from a state that does not allow it.
    #[error("Cannot {} while {}.", .action, .state)]
    InvalidTransition { state: String, action: &'static str },
    /// The asset category is not one of the known categories.
    #[error("Unknown asset category `{}`.", .0)]
    UnknownCategory(String),
    /// The branch listing did not contain the default branch.
    #[error("Default branch `{}` not found in the branch listing.", Color::Blue.paint(.0))]
    DefaultBranchMissing(String),
    /// A clone was requested without a complete source.
    #[error("Missing source or destination.")]
    MissingCloneSource,
    /// A remote call did not complete within the configured timeout.
    #[error("Request to {} timed out.", .0)]
    Timeout(String),
    /// A [reqwest::Error] occurred.
    #[error("transport error: {}", .0)]
    Transport(#[from] reqwest::Error),
    /// A [serde_json::Error] occurred.
    #[error("json error: {}", .0)]
    Json(#[from] serde_json::Error),
    /// A [serde_yaml::Error] occurred.
    #[error("yaml error: {}", .0)]
    Yaml(#[from] serde_yaml::Error),
}

impl SessionError {
    /// Returns whether the failure is an I/O condition a caller may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_))
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod test {
    use super::SessionError;

    #[test]
    fn only_io_failures_are_retryable() {
        assert!(SessionError::Timeout("https://api.github.com".into()).is_retryable());
        assert!(!SessionError::PrUnavailable.is_retryable());
        assert!(!SessionError::CannotDeleteDefaultBranch.is_retryable());
    }
}
