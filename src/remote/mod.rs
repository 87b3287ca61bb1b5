//! The seam between the session and the remote repository API.

use crate::errors::{SessionError, SessionResult};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{self, Display};

mod http;
pub use http::HttpTransport;

pub mod models;

#[cfg(test)]
pub(crate) mod mock;

/// HTTP verbs used against the repository API.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        write!(f, "{}", verb)
    }
}

/// A single remote call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRequest {
    /// The HTTP verb.
    pub method: Method,
    /// The absolute target, including query parameters.
    pub url: String,
    /// Optional JSON body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Whether the access token is attached.
    #[serde(skip)]
    pub authenticate: bool,
}

impl RemoteRequest {
    /// Creates a `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
            authenticate: true,
        }
    }

    /// Creates an unauthenticated `GET` request, for public documents.
    pub fn get_public(url: impl Into<String>) -> Self {
        Self {
            authenticate: false,
            ..Self::get(url)
        }
    }

    /// Creates a `POST` request with a JSON body.
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
            authenticate: true,
        }
    }

    /// Creates an unauthenticated `POST` request, for hosts other than the repository API.
    pub fn post_public(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            authenticate: false,
            ..Self::post(url, body)
        }
    }

    /// Creates a `PUT` request with a JSON body.
    pub fn put(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Put,
            url: url.into(),
            body: Some(body),
            authenticate: true,
        }
    }

    /// Creates a `DELETE` request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
            authenticate: true,
        }
    }

    /// The target without its query string, which carries the access token.
    pub fn route(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

/// The status and raw body of a completed remote call.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RemoteResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

impl RemoteResponse {
    /// Returns whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> SessionResult<T> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Performs remote calls on behalf of a session.
///
/// A [Transport] only reports transport-level failures as errors. Non-2xx responses are
/// returned as-is, and classified by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and waits for its response.
    async fn send(&self, request: &RemoteRequest) -> SessionResult<RemoteResponse>;

    /// Sends a request, turning a non-2xx response into [SessionError::RemoteRequest].
    async fn send_ok(&self, request: RemoteRequest) -> SessionResult<RemoteResponse> {
        let response = self.send(&request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(SessionError::RemoteRequest {
                status: response.status,
                request: Box::new(request),
            })
        }
    }
}
