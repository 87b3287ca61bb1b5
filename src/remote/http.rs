//! A [Transport] backed by `reqwest`.

use super::{Method, RemoteRequest, RemoteResponse, Transport};
use crate::errors::{SessionError, SessionResult};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

/// An HTTP implementation of [Transport].
pub struct HttpTransport {
    client: Client,
    token: String,
}

impl HttpTransport {
    /// Creates a new [HttpTransport] that authenticates with `token` and gives up on any single
    /// request after `timeout`.
    pub fn new(token: impl Into<String>, timeout: Duration) -> SessionResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RemoteRequest) -> SessionResult<RemoteResponse> {
        debug!(method = %request.method, route = request.route(), "sending remote request");

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        let builder = if request.authenticate {
            builder.header(header::AUTHORIZATION, format!("token {}", self.token))
        } else {
            builder
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| classify(e, request))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(e, request))?;

        debug!(status, route = request.route(), "received remote response");
        Ok(RemoteResponse { status, body })
    }
}

/// Maps a [reqwest::Error] onto the session's error taxonomy.
fn classify(error: reqwest::Error, request: &RemoteRequest) -> SessionError {
    if error.is_timeout() {
        SessionError::Timeout(request.route().to_string())
    } else {
        SessionError::Transport(error.without_url())
    }
}
