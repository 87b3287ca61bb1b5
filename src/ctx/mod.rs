//! The in-memory context of the `sitedraft` application.

use crate::{
    cli::SiteArgs,
    remote::{models::Contents, HttpTransport},
    session::{RepositorySession, SessionOptions, TracingSink},
    settings::Settings,
    site::Site,
};
use anyhow::Result;
use std::sync::Arc;

mod actions;
mod fmt;

/// The in-memory context of the `sitedraft` application.
pub struct SdContext {
    /// The user's settings.
    pub settings: Settings,
    /// The editing session against the selected site.
    pub session: RepositorySession,
}

impl SdContext {
    /// Opens a [RepositorySession] against the site described by `site`, speaking HTTP to the
    /// hosts named in `settings`.
    pub fn open(settings: Settings, site: SiteArgs) -> Result<Self> {
        let transport = HttpTransport::new(settings.github_token.as_str(), settings.timeout())?;

        let options = SessionOptions {
            owner: site.owner,
            repository: site.repo,
            token: settings.github_token.clone(),
            file: site.file,
            branch: site.branch,
            upload_root: Some(settings.upload_root.clone()),
            api_base: settings.api_base.clone(),
            raw_base: settings.raw_base.clone(),
            site: Site {
                default_branch: site.default_branch,
                site_root: site.site_root,
            },
        };
        let session = RepositorySession::new(options, Arc::new(transport), Arc::new(TracingSink))?;

        Ok(Self { settings, session })
    }

    /// Runs the cold-start pipeline, then checks out the file's draft if it has one.
    ///
    /// ## Returns
    /// - `Ok(Some(contents))` - The edited file, as it reads on the checked out branch.
    /// - `Ok(None)` - No file is being edited.
    pub async fn load(&mut self) -> Result<Option<Contents>> {
        let contents = self.session.bootstrap().await?;
        match self.session.resume_draft().await? {
            Some(draft) => Ok(Some(draft)),
            None => Ok(contents),
        }
    }
}
