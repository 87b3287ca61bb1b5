//! A recording [Transport] for tests.

use super::{Method, RemoteRequest, RemoteResponse, Transport};
use crate::errors::{SessionError, SessionResult};
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Mutex;

struct Route {
    method: Method,
    path_suffix: String,
    /// `None` never answers, as if the call timed out.
    reply: Option<RemoteResponse>,
}

/// Answers requests from a fixed routing table, and records every request it sees.
///
/// Routes match on method and on the suffix of the URL path. Unmatched requests get a 404.
#[derive(Default)]
pub(crate) struct MockTransport {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<RemoteRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a response. Later registrations for the same route take precedence.
    pub(crate) fn respond(
        self,
        method: Method,
        path_suffix: &str,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        self.respond_raw(method, path_suffix, status, body.to_string())
    }

    pub(crate) fn respond_raw(
        self,
        method: Method,
        path_suffix: &str,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.route(
            method,
            path_suffix,
            Some(RemoteResponse {
                status,
                body: body.into(),
            }),
        )
    }

    /// Registers a route whose calls fail with [SessionError::Timeout].
    pub(crate) fn time_out(self, method: Method, path_suffix: &str) -> Self {
        self.route(method, path_suffix, None)
    }

    fn route(self, method: Method, path_suffix: &str, reply: Option<RemoteResponse>) -> Self {
        self.routes.lock().unwrap().insert(
            0,
            Route {
                method,
                path_suffix: path_suffix.to_string(),
                reply,
            },
        );
        self
    }

    /// All requests sent so far, in order.
    pub(crate) fn calls(&self) -> Vec<RemoteRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// `METHOD path` for every request sent so far, in order.
    pub(crate) fn call_log(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| format!("{} {}", c.method, Url::parse(&c.url).unwrap().path()))
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &RemoteRequest) -> SessionResult<RemoteResponse> {
        self.calls.lock().unwrap().push(request.clone());

        let path = Url::parse(&request.url).unwrap().path().to_string();
        let routes = self.routes.lock().unwrap();
        match routes
            .iter()
            .find(|r| r.method == request.method && path.ends_with(&r.path_suffix))
        {
            Some(Route { reply: Some(response), .. }) => Ok(response.clone()),
            Some(Route { reply: None, .. }) => {
                Err(SessionError::Timeout(request.route().to_string()))
            }
            None => Ok(RemoteResponse {
                status: 404,
                body: r#"{"message":"Not Found"}"#.to_string(),
            }),
        }
    }
}
