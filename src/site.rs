//! The deployed site a repository builds, and where its configuration documents are served.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an S3 static-website host, capturing the bucket name.
static S3_WEBSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^http://(.*)\.s3-website-(.*)\.amazonaws\.com").expect("valid pattern")
});

/// Where a configuration document is read from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConfigSource {
    /// The repository itself, at the session's current ref.
    Repository,
    /// The site's public deployment.
    Deployment,
}

/// The site record a repository belongs to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Site {
    /// The branch the site is built from.
    pub default_branch: String,
    /// The public root of the deployed site, if it has been deployed.
    pub site_root: Option<String>,
}

impl Site {
    /// Returns the root under which deployments publish configuration documents.
    ///
    /// S3 website hosts are rewritten to the bucket's REST endpoint.
    pub fn deployment_root(&self) -> String {
        let site_root = self.site_root.as_deref().unwrap_or_default();
        match S3_WEBSITE.captures(site_root).and_then(|c| c.get(1)) {
            Some(bucket) => format!("https://s3.amazonaws.com/{}", bucket.as_str()),
            None => site_root.to_string(),
        }
    }

    /// The URL of a configuration document published by the deployment.
    pub fn deployment_config_url(&self, owner: &str, repository: &str, file: &str) -> String {
        [
            self.deployment_root().as_str(),
            "site",
            owner,
            repository,
            file,
        ]
        .join("/")
    }
}

/// The URL of a raw file in the repository at `branch`.
pub fn raw_config_url(
    raw_base: &str,
    owner: &str,
    repository: &str,
    branch: &str,
    file: &str,
) -> String {
    [raw_base.trim_end_matches('/'), owner, repository, branch, file].join("/")
}
