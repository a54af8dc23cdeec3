//! HTTP transport against the catalog service.
//!
//! One call is one request: no retry, no cancellation. A request timeout is
//! only applied when one is configured; by default a call waits for the
//! transport to resolve.

use std::{error::Error as _, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request relative to the backend base URL. Path segments are kept
/// unencoded here and percent-encoded when the final URL is built.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: HttpMethod,
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl BackendRequest {
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: HttpMethod::Get,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    pub fn post<I, S, B>(segments: I, body: &B) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        B: Serialize + ?Sized,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let body = serde_json::to_value(body).map_err(|err| ClientError::Decode {
            url: display_path(&segments),
            detail: format!("request body could not be encoded: {err}"),
        })?;
        Ok(Self {
            method: HttpMethod::Post,
            segments,
            body: Some(body),
        })
    }

    /// `/a/b/c` form used in log lines.
    pub fn path(&self) -> String {
        display_path(&self.segments)
    }
}

fn display_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[async_trait]
pub trait CatalogTransport: Send + Sync {
    async fn execute(&self, request: &BackendRequest) -> Result<Value, ClientError>;
}

#[derive(Debug, Error)]
pub enum TransportSetupError {
    #[error("invalid backend url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url {0:?} cannot be used as a base for request paths")]
    NotABase(String),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// reqwest-backed transport bound to one base URL for its whole lifetime.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportSetupError> {
        let parsed = Url::parse(base_url.trim()).map_err(|source| {
            TransportSetupError::InvalidUrl {
                url: base_url.to_string(),
                source,
            }
        })?;
        if parsed.cannot_be_a_base() {
            return Err(TransportSetupError::NotABase(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: parsed,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn url_for(&self, segments: &[String]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Connection {
                url: self.base_url.to_string(),
                detail: "base url cannot carry a request path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn describe_send_error(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            if let Some(timeout) = self.timeout {
                return format!("request timed out after {}s", timeout.as_secs_f64());
            }
        }
        let mut detail = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}

#[async_trait]
impl CatalogTransport for BackendClient {
    async fn execute(&self, request: &BackendRequest) -> Result<Value, ClientError> {
        let url = self.url_for(&request.segments)?;
        let url_text = url.to_string();

        let builder = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|err| ClientError::Connection {
                url: url_text.clone(),
                detail: self.describe_send_error(&err),
            })?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::Connection {
                url: url_text.clone(),
                detail: self.describe_send_error(&err),
            })?;
        debug!(
            method = request.method.as_str(),
            url = %url_text,
            status = status.as_u16(),
            bytes = bytes.len(),
            "catalog response received"
        );

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                url: url_text,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|err| ClientError::Decode {
            url: url_text,
            detail: err.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
