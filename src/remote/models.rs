//! Response bodies returned by the repository API.

use crate::{codec, errors::SessionResult};
use serde::{Deserialize, Serialize};

/// A branch, as returned by the branch listing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchCommit,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BranchCommit {
    pub sha: String,
}

/// A single entry in a directory listing.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// File name, e.g. `logo.png`.
    pub name: String,
    /// Full path within the repository, e.g. `uploads/logo.png`.
    #[serde(default)]
    pub path: String,
    /// Blob SHA of the entry.
    #[serde(default)]
    pub sha: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// `file`, `dir`, `symlink` or `submodule`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

#[cfg(test)]
impl ContentEntry {
    /// Creates an entry that only knows its name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A single file read through the contents API.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContentFile {
    pub name: String,
    pub path: String,
    pub sha: String,
    /// Base64-encoded file content.
    #[serde(default)]
    pub content: String,
}

impl ContentFile {
    /// Returns the decoded file content.
    pub fn decoded_content(&self) -> SessionResult<String> {
        codec::decode(&self.content)
    }
}

/// The result of reading a path: either a file or the listing of a directory.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    File(ContentFile),
    Directory(Vec<ContentEntry>),
}

/// The response to a content write.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct CommitResponse {
    pub content: ContentEntry,
}

/// A pull request, trimmed to the fields the session reads.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub head: PullRequestHead,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PullRequestHead {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// The response to a pull request merge.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub message: String,
}

/// Repository metadata.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub default_branch: String,
}
