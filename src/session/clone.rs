//! Cloning a template repository into a user's or organization's account.

use super::RepositorySession;
use crate::{
    constants::DEFAULT_ENGINE,
    endpoint::UrlOptions,
    errors::{SessionError, SessionResult},
    remote::{models::RepositoryInfo, RemoteRequest},
};
use serde_json::json;
use tracing::info;

/// The repository to clone.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CloneSource {
    pub owner: String,
    pub repository: String,
}

/// Where the clone lands.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CloneDestination {
    /// The new repository's name.
    pub repository: String,
    /// The owning organization. The authenticated user when absent.
    pub organization: Option<String>,
    /// The branch to build. The session's branch when absent.
    pub branch: Option<String>,
    /// The site build engine. `jekyll` when absent.
    pub engine: Option<String>,
}

impl RepositorySession {
    /// Clones `source` into a new repository.
    ///
    /// The source is checked, the destination repository created, and the clone requested from
    /// the site server, in that order. The first failure aborts the rest.
    ///
    /// ## Returns
    /// - `Err(SessionError::MissingCloneSource)` - The source or destination is incomplete. No
    ///   request is made.
    pub async fn clone_repository(
        &self,
        server_base: &str,
        source: &CloneSource,
        destination: &CloneDestination,
    ) -> SessionResult<serde_json::Value> {
        if [&source.owner, &source.repository, &destination.repository]
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(SessionError::MissingCloneSource);
        }

        // Check the source exists.
        let url = self.url(&UrlOptions {
            owner: Some(source.owner.as_str()),
            repository: Some(source.repository.as_str()),
            root: true,
            path: Some(""),
            ..Default::default()
        });
        let source_info = self
            .transport
            .send_ok(RemoteRequest::get(url))
            .await?
            .json::<RepositoryInfo>()?;

        // Create the destination repository.
        let route = destination
            .organization
            .as_ref()
            .map(|org| format!("orgs/{}", org))
            .unwrap_or_else(|| "user".to_string());
        let url = self.url(&UrlOptions {
            route: Some(route.as_str()),
            method: Some("repos"),
            path: Some(""),
            ..Default::default()
        });
        self.transport
            .send_ok(RemoteRequest::post(
                url,
                json!({ "name": destination.repository }),
            ))
            .await?;

        // Ask the site server to copy the source's history into it. The repository credential
        // stays with the repository API.
        let url = format!("{}/v0/site/clone", server_base.trim_end_matches('/'));
        let body = json!({
            "sourceOwner": source.owner,
            "sourceRepo": source.repository,
            "destinationOrg": destination.organization,
            "destinationRepo": destination.repository,
            "destinationBranch": destination.branch.as_deref().unwrap_or(self.branch()),
            "engine": destination.engine.as_deref().unwrap_or(DEFAULT_ENGINE),
        });
        let response = self
            .transport
            .send_ok(RemoteRequest::post_public(url, body))
            .await?;

        info!(
            source = %source_info.full_name,
            destination = %destination.repository,
            "cloned repository"
        );
        response.json()
    }
}
