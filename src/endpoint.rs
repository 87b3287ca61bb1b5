//! Construction of fully-qualified request targets for the repository API.

use crate::{
    constants::DEFAULT_ROUTE,
    errors::{SessionError, SessionResult},
};
use reqwest::Url;

/// Addressing options for a single remote call.
///
/// With no options set, the target is the contents route of the session's file.
#[derive(Debug, Default, Clone)]
pub struct UrlOptions<'a> {
    /// Resource route. Defaults to `repos`.
    pub route: Option<&'a str>,
    /// Repository owner override.
    pub owner: Option<&'a str>,
    /// Repository name override.
    pub repository: Option<&'a str>,
    /// Fixed sub-route, replacing the `{owner}/{repository}` segments entirely.
    pub method: Option<&'a str>,
    /// Address the repository itself rather than its `contents`.
    pub root: bool,
    /// Explicit path. Falls back to the builder's file.
    pub path: Option<&'a str>,
    /// Query overrides. `None` removes a default parameter.
    pub params: Vec<(&'a str, Option<String>)>,
}

impl<'a> UrlOptions<'a> {
    /// Options addressing `{owner}/{repository}/{path}`.
    pub fn root(path: &'a str) -> Self {
        Self {
            root: true,
            path: Some(path),
            ..Default::default()
        }
    }

    /// Options addressing `{owner}/{repository}/contents/{path}`.
    pub fn contents(path: &'a str) -> Self {
        Self {
            path: Some(path),
            ..Default::default()
        }
    }

    /// Adds a query override.
    pub fn param(mut self, key: &'a str, value: impl ToString) -> Self {
        self.params.push((key, Some(value.to_string())));
        self
    }

    /// Removes a default query parameter.
    pub fn without_param(mut self, key: &'a str) -> Self {
        self.params.push((key, None));
        self
    }
}

/// Builds request targets for one repository.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    /// The API root, e.g. `https://api.github.com`.
    base: Url,
    /// Default repository owner.
    owner: String,
    /// Default repository name.
    repository: String,
    /// The access token attached to every request.
    token: String,
    /// The path used when no explicit path is given.
    file: Option<String>,
}

impl EndpointBuilder {
    /// Creates a new [EndpointBuilder].
    ///
    /// ## Returns
    /// - `Err(SessionError::Configuration)` - If `api_base` is not an absolute, hierarchical URL.
    pub fn new(
        api_base: &str,
        owner: impl Into<String>,
        repository: impl Into<String>,
        token: impl Into<String>,
        file: Option<String>,
    ) -> SessionResult<Self> {
        let base = Url::parse(api_base)
            .map_err(|e| SessionError::Configuration(format!("api base `{api_base}`: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(SessionError::Configuration(format!(
                "api base `{api_base}` cannot carry a path"
            )));
        }

        Ok(Self {
            base,
            owner: owner.into(),
            repository: repository.into(),
            token: token.into(),
            file,
        })
    }

    /// The default repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The default repository name.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Builds the absolute URL for a call made while `branch` is checked out.
    pub fn url(&self, branch: &str, opts: &UrlOptions<'_>) -> String {
        let mut url = self.base.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();

            let route = opts.route.unwrap_or(DEFAULT_ROUTE);
            segments.extend(split_path(route));

            if let Some(method) = opts.method {
                segments.extend(split_path(method));
            } else {
                let owner = opts.owner.unwrap_or(&self.owner);
                let repository = opts.repository.unwrap_or(&self.repository);
                segments.push(owner).push(repository);
                if !opts.root {
                    segments.push("contents");
                }
            }

            if let Some(path) = opts.path.or(self.file.as_deref()) {
                segments.extend(split_path(path));
            }
        }

        // Defaults first, then caller overrides in order. Overrides win.
        let mut query = vec![
            ("access_token", self.token.clone()),
            ("ref", branch.to_string()),
        ];
        for (key, value) in &opts.params {
            let existing = query.iter().position(|(k, _)| k == key);
            match (existing, value) {
                (Some(i), Some(value)) => query[i].1 = value.clone(),
                (Some(i), None) => {
                    query.remove(i);
                }
                (None, Some(value)) => query.push((*key, value.clone())),
                (None, None) => {}
            }
        }

        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query);
        }

        url.to_string()
    }
}

/// Splits a slash-separated path into its non-empty segments.
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
