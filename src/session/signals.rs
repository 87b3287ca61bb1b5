//! Lifecycle signals emitted by a [RepositorySession].
//!
//! [RepositorySession]: super::RepositorySession

use crate::{
    config::ConfigFiles,
    errors::{CommitRequest, SessionError},
    remote::models::ContentEntry,
};
use tracing::{info, warn};

/// Receives lifecycle signals from a session. Every method defaults to a no-op.
pub trait NotificationSink: Send + Sync {
    /// The configuration documents were fetched. Parse failures have already degraded to
    /// empty documents, so this signal has no error form.
    fn config_fetched(&self, _files: &ConfigFiles) {}

    /// The branch listing was fetched and the drafts resolved.
    fn drafts_fetched(&self, _result: Result<&[String], &SessionError>) {}

    /// The upload root was listed.
    fn assets_fetched(&self, _result: Result<&[ContentEntry], &SessionError>) {}

    /// A content commit landed.
    fn commit_succeeded(&self, _request: &CommitRequest) {}

    /// A content commit was rejected, or never reached the remote store.
    fn commit_failed(&self, _request: &CommitRequest, _error: &SessionError) {}

    /// An asset landed under the upload root.
    fn upload_succeeded(&self, _entry: &ContentEntry) {}
}

/// A [NotificationSink] that logs every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn config_fetched(&self, files: &ConfigFiles) {
        info!(documents = files.0.len(), "configuration fetched");
    }

    fn drafts_fetched(&self, result: Result<&[String], &SessionError>) {
        match result {
            Ok(drafts) => info!(drafts = drafts.len(), "drafts fetched"),
            Err(e) => warn!(error = %e, "failed to fetch drafts"),
        }
    }

    fn assets_fetched(&self, result: Result<&[ContentEntry], &SessionError>) {
        match result {
            Ok(assets) => info!(assets = assets.len(), "assets fetched"),
            Err(e) => warn!(error = %e, "failed to fetch assets"),
        }
    }

    fn commit_succeeded(&self, request: &CommitRequest) {
        info!(path = %request.path, branch = %request.branch, "commit succeeded");
    }

    fn commit_failed(&self, request: &CommitRequest, error: &SessionError) {
        warn!(path = %request.path, branch = %request.branch, error = %error, "commit failed");
    }

    fn upload_succeeded(&self, entry: &ContentEntry) {
        info!(path = %entry.path, "upload succeeded");
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::sync::Mutex;

    /// Records the name and outcome of every signal.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        signals: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        pub(crate) fn signals(&self) -> Vec<String> {
            self.signals.lock().unwrap().clone()
        }

        fn record(&self, signal: &str) {
            self.signals.lock().unwrap().push(signal.to_string());
        }
    }

    fn outcome<T, E>(result: &Result<T, E>) -> &'static str {
        if result.is_ok() {
            "success"
        } else {
            "error"
        }
    }

    impl NotificationSink for RecordingSink {
        fn config_fetched(&self, _files: &ConfigFiles) {
            self.record("config:success");
        }

        fn drafts_fetched(&self, result: Result<&[String], &SessionError>) {
            self.record(&format!("drafts:{}", outcome(&result)));
        }

        fn assets_fetched(&self, result: Result<&[ContentEntry], &SessionError>) {
            self.record(&format!("assets:{}", outcome(&result)));
        }

        fn commit_succeeded(&self, _request: &CommitRequest) {
            self.record("commit:success");
        }

        fn commit_failed(&self, _request: &CommitRequest, _error: &SessionError) {
            self.record("commit:error");
        }

        fn upload_succeeded(&self, _entry: &ContentEntry) {
            self.record("upload:success");
        }
    }
}
