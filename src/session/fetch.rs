//! Refreshing the session's view of the repository.

use super::RepositorySession;
use crate::{
    codec,
    config::{ConfigFile, ConfigFiles},
    constants::{NAVIGATION_CONFIG_FILE, PAGE_SIZE, SITE_CONFIG_FILE},
    endpoint::UrlOptions,
    errors::{SessionError, SessionResult},
    remote::{
        models::{Branch, ContentEntry, Contents},
        RemoteRequest,
    },
    site::{self, ConfigSource},
};
use futures::future::join_all;
use itertools::Itertools;
use tracing::{debug, warn};

/// The configuration documents fetched on every cold start, and where each is read from.
const CONFIG_DOCUMENTS: [(&str, ConfigSource); 2] = [
    (SITE_CONFIG_FILE, ConfigSource::Repository),
    (NAVIGATION_CONFIG_FILE, ConfigSource::Deployment),
];

impl RepositorySession {
    /// The URL a configuration document is read from.
    fn config_url(&self, file: &str, source: ConfigSource) -> String {
        let (owner, repository) = (self.endpoints.owner(), self.endpoints.repository());
        match source {
            ConfigSource::Repository => {
                site::raw_config_url(&self.raw_base, owner, repository, self.branch(), file)
            }
            ConfigSource::Deployment => self.site.deployment_config_url(owner, repository, file),
        }
    }

    /// Fetches one configuration document. Every failure degrades to an absent, empty document.
    async fn fetch_config_file(&self, file: &str, source: ConfigSource) -> ConfigFile {
        let request = RemoteRequest::get_public(self.config_url(file, source));
        match self.transport.send(&request).await {
            Ok(response) if response.status == 200 => {
                ConfigFile::from_body(file, true, &response.body)
            }
            Ok(response) => {
                debug!(file, status = response.status, "configuration document not present");
                ConfigFile::default()
            }
            Err(e) => {
                warn!(file, error = %e, "failed to fetch configuration document");
                ConfigFile::default()
            }
        }
    }

    /// Fetches the site configuration documents concurrently, and replaces the session's copy
    /// once all of them have completed.
    pub async fn fetch_config(&mut self) -> &ConfigFiles {
        let fetched = join_all(
            CONFIG_DOCUMENTS
                .iter()
                .map(|&(file, source)| self.fetch_config_file(file, source)),
        )
        .await;

        let mut files = ConfigFiles::default();
        for ((name, _), file) in CONFIG_DOCUMENTS.iter().zip(fetched) {
            files.insert(*name, file);
        }
        self.config_files = files;

        self.sink.config_fetched(&self.config_files);
        &self.config_files
    }

    /// Lists branches, and resolves the drafts and the default branch's head from them.
    async fn request_drafts(&self) -> SessionResult<(Vec<String>, String)> {
        let url = self.url(&UrlOptions::root("branches").param("per_page", PAGE_SIZE));
        let branches = self
            .transport
            .send_ok(RemoteRequest::get(url))
            .await?
            .json::<Vec<Branch>>()?;

        let drafts = branches
            .iter()
            .filter_map(|b| codec::draft_file_path(&b.name).map(|path| (b, path)))
            .filter_map(|(b, path)| match path {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(branch = %b.name, error = %e, "skipping undecodable draft branch");
                    None
                }
            })
            .unique()
            .collect::<Vec<_>>();

        let default_branch = self.default_branch();
        let default_sha = branches
            .iter()
            .find(|b| b.name == default_branch)
            .map(|b| b.commit.sha.clone())
            .ok_or_else(|| SessionError::DefaultBranchMissing(default_branch.to_string()))?;

        Ok((drafts, default_sha))
    }

    /// Refreshes the drafts and the default branch's head SHA.
    ///
    /// ## Returns
    /// - `Err(SessionError::DefaultBranchMissing)` - The listing does not contain the default
    ///   branch. Neither the drafts nor the SHA are updated.
    pub async fn fetch_drafts(&mut self) -> SessionResult<&[String]> {
        match self.request_drafts().await {
            Ok((drafts, default_sha)) => {
                self.drafts = drafts;
                self.default_sha = Some(default_sha);
                self.sink.drafts_fetched(Ok(&self.drafts));
                Ok(&self.drafts)
            }
            Err(e) => {
                self.sink.drafts_fetched(Err(&e));
                Err(e)
            }
        }
    }

    /// Lists the upload root.
    async fn request_assets(&self) -> SessionResult<Vec<ContentEntry>> {
        let url = self.url(&UrlOptions::contents(&self.upload_root));
        self.transport
            .send_ok(RemoteRequest::get(url))
            .await?
            .json::<Vec<ContentEntry>>()
    }

    fn apply_assets(&mut self, result: SessionResult<Vec<ContentEntry>>) -> SessionResult<()> {
        match result {
            Ok(assets) => {
                self.assets = assets;
                self.sink.assets_fetched(Ok(&self.assets));
                Ok(())
            }
            Err(e) => {
                self.sink.assets_fetched(Err(&e));
                Err(e)
            }
        }
    }

    /// Refreshes the asset listing.
    pub async fn fetch_assets(&mut self) -> SessionResult<&[ContentEntry]> {
        let result = self.request_assets().await;
        self.apply_assets(result)?;
        Ok(&self.assets)
    }

    /// Reads the session's file at the checked out branch.
    async fn request_content(&self) -> SessionResult<Contents> {
        let url = self.url(&UrlOptions::contents(self.target_file()?));
        self.transport
            .send_ok(RemoteRequest::get(url))
            .await?
            .json::<Contents>()
    }

    fn apply_content(&mut self, contents: &Contents) {
        if let Contents::File(file) = contents {
            self.blob_sha = Some(file.sha.clone());
        }
    }

    /// Reads the session's file, remembering its blob SHA.
    pub async fn fetch_content(&mut self) -> SessionResult<Contents> {
        let contents = self.request_content().await?;
        self.apply_content(&contents);
        Ok(contents)
    }

    /// Runs the cold-start pipeline.
    ///
    /// Configuration is fetched first, then drafts, which resolve the default branch's head.
    /// Assets and the file's content are then fetched concurrently. A failed asset listing is
    /// signalled but does not fail the pipeline.
    ///
    /// ## Returns
    /// - `Ok(Some(contents))` - The session's file.
    /// - `Ok(None)` - The session has no file.
    pub async fn bootstrap(&mut self) -> SessionResult<Option<Contents>> {
        self.fetch_config().await;
        self.fetch_drafts().await?;

        let has_file = self.file().is_some();
        let (assets, content) = tokio::join!(self.request_assets(), async {
            if has_file {
                self.request_content().await.map(Some)
            } else {
                Ok(None)
            }
        });

        if let Err(e) = self.apply_assets(assets) {
            warn!(error = %e, "continuing without an asset listing");
        }
        let content = content?;
        if let Some(contents) = &content {
            self.apply_content(contents);
        }
        Ok(content)
    }
}
