//! The editing context of one user against one file in one repository.

use crate::{
    config::ConfigFiles,
    constants::DEFAULT_UPLOAD_ROOT,
    endpoint::{EndpointBuilder, UrlOptions},
    errors::{SessionError, SessionResult},
    remote::{models::ContentEntry, Transport},
    site::Site,
};
use std::sync::Arc;

mod clone;
pub use clone::{CloneDestination, CloneSource};

mod fetch;

mod signals;
pub use signals::{NotificationSink, TracingSink};

mod state;
pub use state::DraftState;

mod workflow;
pub use workflow::{CommitOutcome, Edit};

/// Everything needed to open a [RepositorySession].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// The repository owner.
    pub owner: String,
    /// The repository name.
    pub repository: String,
    /// The access token.
    pub token: String,
    /// The file being edited, if any.
    pub file: Option<String>,
    /// The branch to open the session on. Defaults to the site's default branch.
    pub branch: Option<String>,
    /// The path under which uploaded assets live.
    pub upload_root: Option<String>,
    /// The repository API root.
    pub api_base: String,
    /// The raw content host.
    pub raw_base: String,
    /// The site the repository builds.
    pub site: Site,
}

/// One user's editing context against one file in one repository.
///
/// The session owns the identity of the checked out branch through its [DraftState], and the
/// in-memory copies of the configuration, drafts and assets it fetched. Nothing outlives the
/// session.
pub struct RepositorySession {
    /// Performs every remote call.
    transport: Arc<dyn Transport>,
    /// Receives lifecycle signals.
    sink: Arc<dyn NotificationSink>,
    /// Addresses every repository API call.
    endpoints: EndpointBuilder,
    /// The site the repository builds.
    site: Site,
    /// The raw content host.
    raw_base: String,
    /// The file being edited.
    file: Option<String>,
    /// The path under which uploaded assets live.
    upload_root: String,
    /// The draft-publish state.
    state: DraftState,
    /// The last listing of the upload root.
    assets: Vec<ContentEntry>,
    /// The fetched configuration documents.
    config_files: ConfigFiles,
    /// The last known blob SHA of the edited file.
    blob_sha: Option<String>,
    /// The last known commit SHA of the default branch.
    default_sha: Option<String>,
    /// The files that have a draft branch.
    drafts: Vec<String>,
}

impl RepositorySession {
    /// Opens a new [RepositorySession].
    ///
    /// ## Returns
    /// - `Err(SessionError::Configuration)` - If the token, owner, repository or default branch
    ///   is missing.
    pub fn new(
        options: SessionOptions,
        transport: Arc<dyn Transport>,
        sink: Arc<dyn NotificationSink>,
    ) -> SessionResult<Self> {
        let required = [
            ("access token", &options.token),
            ("repository owner", &options.owner),
            ("repository name", &options.repository),
            ("default branch", &options.site.default_branch),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SessionError::Configuration(format!("Must provide a {}", name)));
        }

        let file = options.file.filter(|f| !f.is_empty());
        let endpoints = EndpointBuilder::new(
            &options.api_base,
            options.owner,
            options.repository,
            options.token,
            file.clone(),
        )?;
        let state = options
            .branch
            .as_deref()
            .map(|b| DraftState::on_branch(b, &options.site.default_branch))
            .unwrap_or_default();
        let upload_root = options
            .upload_root
            .unwrap_or_else(|| DEFAULT_UPLOAD_ROOT.to_string())
            .trim_matches('/')
            .to_string();

        Ok(Self {
            transport,
            sink,
            endpoints,
            site: options.site,
            raw_base: options.raw_base,
            file,
            upload_root,
            state,
            assets: Vec::new(),
            config_files: ConfigFiles::default(),
            blob_sha: None,
            default_sha: None,
            drafts: Vec::new(),
        })
    }

    /// The repository owner.
    pub fn owner(&self) -> &str {
        self.endpoints.owner()
    }

    /// The repository name.
    pub fn repository(&self) -> &str {
        self.endpoints.repository()
    }

    /// The checked out branch.
    pub fn branch(&self) -> &str {
        self.state.branch(&self.site.default_branch)
    }

    /// The site's default branch.
    pub fn default_branch(&self) -> &str {
        &self.site.default_branch
    }

    /// The draft-publish state.
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// The file being edited.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// The file being edited, required by the draft workflow.
    fn target_file(&self) -> SessionResult<&str> {
        self.file()
            .ok_or_else(|| SessionError::Configuration("Must select a file to edit".to_string()))
    }

    /// The path under which uploaded assets live.
    pub fn upload_root(&self) -> &str {
        &self.upload_root
    }

    /// The last listing of the upload root.
    pub fn assets(&self) -> &[ContentEntry] {
        &self.assets
    }

    /// The fetched configuration documents.
    pub fn config_files(&self) -> &ConfigFiles {
        &self.config_files
    }

    /// The files that have a draft branch.
    pub fn drafts(&self) -> &[String] {
        &self.drafts
    }

    /// The last known blob SHA of the edited file.
    pub fn blob_sha(&self) -> Option<&str> {
        self.blob_sha.as_deref()
    }

    /// The last known commit SHA of the default branch.
    pub fn default_sha(&self) -> Option<&str> {
        self.default_sha.as_deref()
    }

    /// Builds a repository API URL for the checked out branch.
    fn url(&self, opts: &UrlOptions<'_>) -> String {
        self.endpoints.url(self.branch(), opts)
    }

    /// Returns whether `path` lies under the upload root.
    fn is_upload(&self, path: &str) -> bool {
        path.trim_start_matches('/')
            .strip_prefix(self.upload_root.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}
