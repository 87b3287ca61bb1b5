//! The save and publish pipelines, and the remote steps they are composed of.

use super::RepositorySession;
use crate::{
    codec,
    constants::{MERGE_COMMIT_MESSAGE, NAVBAR_COMMIT_MESSAGE, NAVBAR_PATH, PAGE_SIZE},
    endpoint::UrlOptions,
    errors::{CommitError, CommitRequest, SessionError, SessionResult},
    navigation::{self, UiTreeNode},
    remote::{
        models::{CommitResponse, ContentEntry, Contents, MergeResult, PullRequest},
        RemoteRequest,
    },
};
use serde_json::json;
use tracing::{info, warn};

/// The content of an [Edit].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EditBody {
    /// Text content, base64-encoded on commit.
    Text(String),
    /// Content that is already base64-encoded, e.g. a binary upload.
    Base64(String),
}

/// A change to a single file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Edit {
    /// The path to write. Defaults to the session's file.
    pub path: Option<String>,
    /// The commit message.
    pub message: String,
    /// The new content.
    pub body: EditBody,
    /// The blob SHA the write replaces. Defaults to the session's remembered SHA when
    /// writing the session's file.
    pub sha: Option<String>,
}

impl Edit {
    /// An edit of the session's file.
    pub fn text(message: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
            body: EditBody::Text(content.into()),
            sha: None,
        }
    }

    /// A write of pre-encoded content to `path`.
    pub fn base64(
        path: impl Into<String>,
        message: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
            body: EditBody::Base64(payload.into()),
            sha: None,
        }
    }

    /// Targets `path` instead of the session's file.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the blob SHA the write replaces.
    pub fn replacing(mut self, sha: Option<String>) -> Self {
        self.sha = sha;
        self
    }
}

/// What a successful commit wrote.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommitOutcome {
    /// A content file.
    Content(ContentEntry),
    /// An asset under the upload root.
    Upload(ContentEntry),
}

/// Reverses the brace escaping applied by the rich-text editor.
fn unescape_braces(content: &str) -> String {
    content.replace("%7B", "{").replace("%7D", "}")
}

impl RepositorySession {
    /// Builds the body of a content write for `edit`.
    pub(crate) fn commit_request(&self, edit: &Edit) -> SessionResult<CommitRequest> {
        let path = match &edit.path {
            Some(path) => path.clone(),
            None => self.target_file()?.to_string(),
        };
        let content = match &edit.body {
            EditBody::Text(text) => codec::encode(&unescape_braces(text)),
            EditBody::Base64(payload) => payload.clone(),
        };
        // The remembered SHA belongs to the session's file. It is never sent for another path.
        let sha = edit.sha.clone().or_else(|| {
            (self.file() == Some(path.as_str()))
                .then(|| self.blob_sha.clone())
                .flatten()
        });

        Ok(CommitRequest {
            path,
            message: edit.message.clone(),
            content,
            branch: self.branch().to_string(),
            sha,
        })
    }

    /// Writes `edit` to the checked out branch.
    ///
    /// A write under the upload root is an asset upload: on success the asset listing is
    /// refreshed and an upload signal is emitted instead of a commit signal.
    ///
    /// ## Returns
    /// - `Err(SessionError::Commit)` - The remote store rejected the write. Local SHA state is
    ///   left untouched.
    /// - `Err(_)` - The write never reached the remote store. The failure is signalled the same
    ///   way as a rejection.
    pub async fn commit(&mut self, edit: &Edit) -> SessionResult<CommitOutcome> {
        let request = self.commit_request(edit)?;
        let url = self.url(&UrlOptions::contents(&request.path));
        let remote = RemoteRequest::put(url, serde_json::to_value(&request)?);

        let response = match self.transport.send(&remote).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                let error = SessionError::from(CommitError {
                    request: request.clone(),
                    status: response.status,
                });
                self.sink.commit_failed(&request, &error);
                return Err(error);
            }
            Err(error) => {
                self.sink.commit_failed(&request, &error);
                return Err(error);
            }
        };

        let written = response.json::<CommitResponse>()?.content;
        if self.file() == Some(request.path.as_str()) {
            self.blob_sha = Some(written.sha.clone());
        }

        if self.is_upload(&request.path) {
            if let Err(e) = self.fetch_assets().await {
                warn!(error = %e, "asset listing refresh failed after upload");
            }
            self.sink.upload_succeeded(&written);
            Ok(CommitOutcome::Upload(written))
        } else {
            self.sink.commit_succeeded(&request);
            Ok(CommitOutcome::Content(written))
        }
    }

    /// Creates the draft branch for the session's file from the default branch's head, and
    /// checks it out.
    ///
    /// ## Returns
    /// - `Err(SessionError::NoShaAvailable)` - The default branch's SHA is unknown. Fetch
    ///   drafts first.
    pub async fn create_draft_branch(&mut self) -> SessionResult<()> {
        let file = self.target_file()?.to_string();
        let sha = self.default_sha.clone().ok_or(SessionError::NoShaAvailable)?;
        let branch = codec::draft_branch_name(&file);
        let next = self.state.draft_created(branch.clone())?;

        let url = self.url(&UrlOptions::root("git/refs").without_param("ref"));
        let body = json!({ "ref": format!("refs/heads/{}", branch), "sha": sha });
        self.transport.send_ok(RemoteRequest::post(url, body)).await?;

        info!(%branch, %file, "created draft branch");
        self.state = next;
        if !self.drafts.contains(&file) {
            self.drafts.push(file);
        }
        Ok(())
    }

    /// Opens a pull request from the draft branch into the default branch.
    pub async fn create_pr(&mut self) -> SessionResult<PullRequest> {
        let file = self.target_file()?;
        let body = json!({
            "title": format!("Draft updates for {}", file),
            "body": "",
            "head": self.branch(),
            "base": self.default_branch(),
        });
        // Validates that a draft is checked out. The number is filled in below.
        self.state.pr_opened(0)?;

        let url = self.url(&UrlOptions::root("pulls"));
        let pr = self
            .transport
            .send_ok(RemoteRequest::post(url, body))
            .await?
            .json::<PullRequest>()?;

        info!(number = pr.number, branch = self.branch(), "opened pull request");
        self.state = self.state.pr_opened(pr.number)?;
        Ok(pr)
    }

    /// Looks up the open pull request for the draft branch.
    ///
    /// The first listed pull request whose head is the draft branch wins. The listing is
    /// taken in the order the API returns it, which is newest first.
    pub async fn get_pr(&mut self) -> SessionResult<PullRequest> {
        self.state.pr_opened(0)?;

        let head = format!("{}:{}", self.endpoints.owner(), self.branch());
        let url = self.url(
            &UrlOptions::root("pulls")
                .param("per_page", PAGE_SIZE)
                .param("state", "open")
                .param("head", head),
        );
        let pulls = self
            .transport
            .send_ok(RemoteRequest::get(url))
            .await?
            .json::<Vec<PullRequest>>()?;

        let pr = pulls
            .into_iter()
            .find(|pr| pr.head.ref_name == self.branch())
            .ok_or(SessionError::PrUnavailable)?;
        self.state = self.state.pr_opened(pr.number)?;
        Ok(pr)
    }

    /// Merges the known pull request.
    ///
    /// ## Returns
    /// - `Err(SessionError::PrUnavailable)` - No pull request number is known.
    pub async fn merge_pr(&mut self) -> SessionResult<MergeResult> {
        let number = self.state.pr_number().ok_or(SessionError::PrUnavailable)?;
        let next = self.state.pr_merged()?;

        let url = self.url(&UrlOptions::root(&format!("pulls/{}/merge", number)));
        let body = json!({ "commit_message": MERGE_COMMIT_MESSAGE });
        let response = self.transport.send_ok(RemoteRequest::put(url, body)).await?;

        // The merge has landed. A malformed body is still reported.
        info!(number, "merged pull request");
        self.state = next;
        response.json::<MergeResult>()
    }

    /// Deletes the draft branch and returns to the default branch.
    ///
    /// ## Returns
    /// - `Err(SessionError::CannotDeleteDefaultBranch)` - The default branch is checked out.
    ///   No request is made.
    pub async fn delete_branch(&mut self) -> SessionResult<()> {
        let next = self.state.branch_deleted()?;

        let branch = self.branch().to_string();
        let url = self.url(&UrlOptions::root(&format!("git/refs/heads/{}", branch)));
        self.transport.send_ok(RemoteRequest::delete(url)).await?;

        info!(%branch, "deleted draft branch");
        self.state = next;
        if let Some(file) = self.file.clone() {
            self.drafts.retain(|d| *d != file);
        }
        Ok(())
    }

    /// Checks out the existing draft branch of the session's file, when the default branch is
    /// checked out and the file is a known draft. The file is re-read at the draft branch so
    /// that later commits replace the draft's blob.
    ///
    /// ## Returns
    /// - `Ok(Some(contents))` - The draft branch is now checked out, and the file as it reads
    ///   there.
    /// - `Ok(None)` - There was nothing to resume.
    pub async fn resume_draft(&mut self) -> SessionResult<Option<Contents>> {
        let Some(file) = self.file.clone() else {
            return Ok(None);
        };
        if self.state.is_drafting() || !self.drafts.contains(&file) {
            return Ok(None);
        }

        self.state = self.state.draft_created(codec::draft_branch_name(&file))?;
        let contents = self.fetch_content().await?;

        info!(branch = self.branch(), %file, "resumed draft");
        Ok(Some(contents))
    }

    /// Saves `edit` as a draft.
    ///
    /// On a draft branch this is a plain commit. On the default branch a draft branch is
    /// created, the edit committed to it, and a pull request opened, in that order. The first
    /// failing step aborts the rest. Completed steps are not rolled back: the session stays on
    /// the draft branch so the save can be retried.
    pub async fn save(&mut self, edit: &Edit) -> SessionResult<()> {
        if self.state.is_drafting() {
            self.commit(edit).await?;
            return Ok(());
        }

        self.create_draft_branch().await?;
        self.commit(edit).await?;
        self.create_pr().await?;
        Ok(())
    }

    /// Saves `edit`, then merges its pull request and deletes the draft branch.
    ///
    /// A failure after the save leaves a mergeable draft in place, so publishing again is safe.
    pub async fn publish(&mut self, edit: &Edit) -> SessionResult<MergeResult> {
        self.save(edit).await?;
        self.get_pr().await?;
        let merged = self.merge_pr().await?;
        self.delete_branch().await?;
        Ok(merged)
    }

    /// Commits an edited navigation tree to the site's navbar document.
    pub async fn save_navigation(
        &mut self,
        tree: &[UiTreeNode],
        sha: Option<String>,
    ) -> SessionResult<CommitOutcome> {
        let yaml = navigation::to_persisted_tree(tree).to_yaml()?;
        let edit = Edit::text(NAVBAR_COMMIT_MESSAGE, yaml)
            .at(NAVBAR_PATH)
            .replacing(sha);
        self.commit(&edit).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        remote::{mock::MockTransport, Method},
        session::{
            test_support::{options, session},
            DraftState,
        },
    };
    use std::sync::Arc;

    const DRAFT: &str = "_draft-aW5kZXgubWQ=";

    fn committed(sha: &str) -> serde_json::Value {
        json!({ "content": { "name": "index.md", "path": "index.md", "sha": sha } })
    }

    fn pulls() -> serde_json::Value {
        json!([
            { "number": 3, "head": { "ref": "_draft-b3RoZXIubWQ=" } },
            { "number": 7, "head": { "ref": DRAFT } },
            { "number": 9, "head": { "ref": DRAFT } }
        ])
    }

    fn happy_transport() -> Arc<MockTransport> {
        Arc::new(
            MockTransport::new()
                .respond(Method::Post, "/git/refs", 201, json!({ "ref": DRAFT }))
                .respond(Method::Put, "/contents/index.md", 200, committed("blob2"))
                .respond(Method::Post, "/pulls", 201, json!({ "number": 7, "head": { "ref": DRAFT } }))
                .respond(Method::Get, "/pulls", 200, pulls())
                .respond(Method::Put, "/pulls/7/merge", 200, json!({ "merged": true, "sha": "c0ffee" }))
                .respond_raw(Method::Delete, &format!("/git/refs/heads/{}", DRAFT), 204, ""),
        )
    }

    fn body(call: &RemoteRequest) -> &serde_json::Value {
        call.body.as_ref().unwrap()
    }

    #[tokio::test]
    async fn save_on_default_branch_creates_branch_commits_and_opens_pr() {
        let transport = happy_transport();
        let (mut session, sink) = session(options(), &transport);
        session.default_sha = Some("base".into());

        session.save(&Edit::text("Update index", "# Hi")).await.unwrap();

        assert_eq!(
            transport.call_log(),
            [
                "POST /repos/18f/blog/git/refs",
                "PUT /repos/18f/blog/contents/index.md",
                "POST /repos/18f/blog/pulls",
            ]
        );
        let calls = transport.calls();
        assert_eq!(
            body(&calls[0]),
            &json!({ "ref": format!("refs/heads/{}", DRAFT), "sha": "base" })
        );
        assert!(!calls[0].url.contains("ref="));
        assert_eq!(body(&calls[1])["branch"], DRAFT);
        assert_eq!(body(&calls[2])["head"], DRAFT);
        assert_eq!(body(&calls[2])["base"], "main");
        assert_eq!(body(&calls[2])["title"], "Draft updates for index.md");

        assert_eq!(
            session.state(),
            &DraftState::PrOpen {
                branch: DRAFT.into(),
                number: 7
            }
        );
        assert_eq!(session.blob_sha(), Some("blob2"));
        assert_eq!(session.drafts(), ["index.md"]);
        assert_eq!(sink.signals(), ["commit:success"]);
    }

    #[tokio::test]
    async fn save_on_draft_branch_only_commits() {
        let transport = happy_transport();
        let mut opts = options();
        opts.branch = Some(DRAFT.into());
        let (mut session, _) = session(opts, &transport);

        session.save(&Edit::text("Update index", "# Hi")).await.unwrap();

        assert_eq!(
            transport.call_log(),
            ["PUT /repos/18f/blog/contents/index.md"]
        );
        assert_eq!(body(&transport.calls()[0])["branch"], DRAFT);
    }

    #[tokio::test]
    async fn save_without_default_sha_makes_no_calls() {
        let transport = happy_transport();
        let (mut session, _) = session(options(), &transport);

        let err = session.save(&Edit::text("m", "c")).await.unwrap_err();
        assert!(matches!(err, SessionError::NoShaAvailable));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_branch_creation_aborts_before_commit() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::Post, "/git/refs", 422, json!({ "message": "Reference already exists" })),
        );
        let (mut session, _) = session(options(), &transport);
        session.default_sha = Some("base".into());

        let err = session.save(&Edit::text("m", "c")).await.unwrap_err();
        assert!(matches!(err, SessionError::RemoteRequest { status: 422, .. }));
        assert_eq!(transport.call_log(), ["POST /repos/18f/blog/git/refs"]);
        assert_eq!(session.state(), &DraftState::Clean);
    }

    #[tokio::test]
    async fn failed_commit_aborts_before_pr_and_stays_on_draft() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::Post, "/git/refs", 201, json!({}))
                .respond(Method::Put, "/contents/index.md", 409, json!({ "message": "sha mismatch" })),
        );
        let (mut session, sink) = session(options(), &transport);
        session.default_sha = Some("base".into());
        session.blob_sha = Some("stale".into());

        let err = session.save(&Edit::text("m", "c")).await.unwrap_err();
        let SessionError::Commit(commit) = err else {
            panic!("expected a commit error");
        };
        assert_eq!(commit.status, 409);
        assert_eq!(commit.request.sha.as_deref(), Some("stale"));
        assert_eq!(commit.request.branch, DRAFT);

        assert_eq!(
            transport.call_log(),
            [
                "POST /repos/18f/blog/git/refs",
                "PUT /repos/18f/blog/contents/index.md"
            ]
        );
        assert_eq!(session.branch(), DRAFT);
        assert_eq!(session.blob_sha(), Some("stale"));
        assert_eq!(sink.signals(), ["commit:error"]);
    }

    #[tokio::test]
    async fn commit_signals_transport_failures() {
        let transport = Arc::new(MockTransport::new().time_out(Method::Put, "/contents/index.md"));
        let (mut session, sink) = session(options(), &transport);
        session.blob_sha = Some("blob1".into());

        let err = session.commit(&Edit::text("m", "c")).await.unwrap_err();

        assert!(matches!(
            err,
            SessionError::Timeout(ref route) if route.ends_with("/contents/index.md")
        ));
        assert!(err.is_retryable());
        assert_eq!(session.blob_sha(), Some("blob1"));
        assert_eq!(sink.signals(), ["commit:error"]);
    }

    #[tokio::test]
    async fn commit_unescapes_braces_before_encoding() {
        let transport = happy_transport();
        let (mut session, _) = session(options(), &transport);

        session
            .commit(&Edit::text("m", "{% include %7B%7B page.title %7D%7D %}"))
            .await
            .unwrap();

        let sent = body(&transport.calls()[0])["content"]
            .as_str()
            .unwrap()
            .to_string();
        let decoded = codec::decode(&sent).unwrap();
        assert_eq!(decoded, "{% include {{ page.title }} %}");
        assert!(!decoded.contains("%7B"));
    }

    #[tokio::test]
    async fn commit_sends_the_remembered_sha_only_for_the_edited_file() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::Put, "/contents/index.md", 200, committed("blob2"))
                .respond(Method::Put, "/contents/_data/navbar.yml", 201, committed("nav2")),
        );
        let (mut session, _) = session(options(), &transport);
        session.blob_sha = Some("blob1".into());

        session.commit(&Edit::text("m", "c")).await.unwrap();
        session
            .commit(&Edit::text("m", "c").at("_data/navbar.yml"))
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(body(&calls[0])["sha"], "blob1");
        assert!(body(&calls[1]).get("sha").is_none());
        assert_eq!(session.blob_sha(), Some("blob2"));
    }

    #[tokio::test]
    async fn uploads_refresh_assets_instead_of_signalling_a_commit() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(
                    Method::Put,
                    "/contents/uploads/logo.png",
                    201,
                    json!({ "content": { "name": "logo.png", "path": "uploads/logo.png", "sha": "img" } }),
                )
                .respond(
                    Method::Get,
                    "/contents/uploads",
                    200,
                    json!([{ "name": "logo.png", "path": "uploads/logo.png", "type": "file" }]),
                ),
        );
        let (mut session, sink) = session(options(), &transport);

        let outcome = session
            .commit(&Edit::base64("uploads/logo.png", "Upload logo.png", "iVBORw0KGgo="))
            .await
            .unwrap();

        assert!(matches!(outcome, CommitOutcome::Upload(e) if e.path == "uploads/logo.png"));
        assert_eq!(body(&transport.calls()[0])["content"], "iVBORw0KGgo=");
        assert_eq!(session.assets().len(), 1);
        assert_eq!(session.blob_sha(), None);
        assert_eq!(sink.signals(), ["assets:success", "upload:success"]);
    }

    #[tokio::test]
    async fn publish_runs_every_step_in_order() {
        let transport = happy_transport();
        let (mut session, _) = session(options(), &transport);
        session.default_sha = Some("base".into());

        let merged = session.publish(&Edit::text("Publish", "# Hi")).await.unwrap();

        assert!(merged.merged);
        assert_eq!(
            transport.call_log(),
            [
                "POST /repos/18f/blog/git/refs",
                "PUT /repos/18f/blog/contents/index.md",
                "POST /repos/18f/blog/pulls",
                "GET /repos/18f/blog/pulls",
                "PUT /repos/18f/blog/pulls/7/merge",
                format!("DELETE /repos/18f/blog/git/refs/heads/{}", DRAFT).as_str(),
            ]
        );
        let calls = transport.calls();
        assert!(calls[3].url.contains("head=18f%3A_draft-aW5kZXgubWQ%3D"));
        assert_eq!(body(&calls[4])["commit_message"], MERGE_COMMIT_MESSAGE);
        assert_eq!(session.state(), &DraftState::Clean);
        assert_eq!(session.branch(), "main");
        assert!(session.drafts().is_empty());
    }

    #[tokio::test]
    async fn failed_merge_leaves_the_draft_in_place() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::Put, "/contents/index.md", 200, committed("blob2"))
                .respond(Method::Get, "/pulls", 200, pulls())
                .respond(Method::Put, "/pulls/7/merge", 405, json!({ "message": "not mergeable" })),
        );
        let mut opts = options();
        opts.branch = Some(DRAFT.into());
        let (mut session, _) = session(opts, &transport);

        let err = session.publish(&Edit::text("m", "c")).await.unwrap_err();
        assert!(matches!(err, SessionError::RemoteRequest { status: 405, .. }));
        assert_eq!(
            session.state(),
            &DraftState::PrOpen {
                branch: DRAFT.into(),
                number: 7
            }
        );
        assert!(!transport
            .call_log()
            .iter()
            .any(|c| c.starts_with("DELETE")));
    }

    #[tokio::test]
    async fn unreadable_merge_response_is_an_error() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(Method::Put, "/contents/index.md", 200, committed("blob2"))
                .respond(Method::Get, "/pulls", 200, pulls())
                .respond_raw(Method::Put, "/pulls/7/merge", 200, "<p>merged</p>"),
        );
        let mut opts = options();
        opts.branch = Some(DRAFT.into());
        let (mut session, _) = session(opts, &transport);

        let err = session.publish(&Edit::text("m", "c")).await.unwrap_err();
        assert!(matches!(err, SessionError::Json(_)));
        // The merge went through, so the session no longer claims an open pull request.
        assert_eq!(
            session.state(),
            &DraftState::DraftInProgress {
                branch: DRAFT.into()
            }
        );
    }

    #[tokio::test]
    async fn get_pr_picks_the_first_matching_head() {
        let transport = happy_transport();
        let mut opts = options();
        opts.branch = Some(DRAFT.into());
        let (mut session, _) = session(opts, &transport);

        assert_eq!(session.get_pr().await.unwrap().number, 7);
    }

    #[tokio::test]
    async fn get_pr_without_a_match_is_unavailable() {
        let transport = Arc::new(MockTransport::new().respond(Method::Get, "/pulls", 200, json!([])));
        let mut opts = options();
        opts.branch = Some(DRAFT.into());
        let (mut session, _) = session(opts, &transport);

        assert!(matches!(
            session.get_pr().await,
            Err(SessionError::PrUnavailable)
        ));
    }

    #[tokio::test]
    async fn merge_without_a_pr_makes_no_calls() {
        let transport = happy_transport();
        let mut opts = options();
        opts.branch = Some(DRAFT.into());
        let (mut session, _) = session(opts, &transport);

        assert!(matches!(
            session.merge_pr().await,
            Err(SessionError::PrUnavailable)
        ));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn deleting_the_default_branch_makes_no_calls() {
        let transport = happy_transport();
        let (mut session, _) = session(options(), &transport);

        assert!(matches!(
            session.delete_branch().await,
            Err(SessionError::CannotDeleteDefaultBranch)
        ));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn save_navigation_commits_the_navbar() {
        let transport = Arc::new(MockTransport::new().respond(
            Method::Put,
            "/contents/_data/navbar.yml",
            200,
            committed("nav2"),
        ));
        let (mut session, sink) = session(options(), &transport);
        let document = navigation::NavigationDocument::from_yaml(
            "assigned:\n- title: Home\n  href: index.md\n  show_in_menu: true\n",
        )
        .unwrap();
        let tree = navigation::to_ui_tree(&document, &["index.md".to_string()]);

        session
            .save_navigation(&tree, Some("nav1".into()))
            .await
            .unwrap();

        let calls = transport.calls();
        let sent = body(&calls[0]);
        assert_eq!(sent["message"], NAVBAR_COMMIT_MESSAGE);
        assert_eq!(sent["sha"], "nav1");
        let yaml = codec::decode(sent["content"].as_str().unwrap()).unwrap();
        assert_eq!(
            navigation::NavigationDocument::from_yaml(&yaml).unwrap(),
            document
        );
        assert!(!yaml.contains("draft"));
        assert_eq!(sink.signals(), ["commit:success"]);
    }

    #[tokio::test]
    async fn resumes_a_known_draft_at_its_branch() {
        let transport = Arc::new(MockTransport::new().respond(
            Method::Get,
            "/repos/18f/blog/contents/index.md",
            200,
            json!({ "name": "index.md", "path": "index.md", "sha": "draft-blob", "content": "" }),
        ));
        let (mut session, _) = session(options(), &transport);

        // Not a draft yet.
        assert!(session.resume_draft().await.unwrap().is_none());
        assert!(transport.calls().is_empty());

        session.drafts.push("index.md".into());
        assert!(matches!(
            session.resume_draft().await.unwrap(),
            Some(Contents::File(_))
        ));
        assert_eq!(session.branch(), DRAFT);
        assert_eq!(session.blob_sha(), Some("draft-blob"));
        assert!(transport.calls()[0].url.contains("ref=_draft-aW5kZXgubWQ"));

        // Already on the draft.
        assert!(session.resume_draft().await.unwrap().is_none());
        assert_eq!(transport.calls().len(), 1);
    }
}
