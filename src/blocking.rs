//! Synchronous client.
//!
//! Every endpoint module exposes `blocking::` variants of its functions that
//! take this client instead of the asynchronous [`crate::Client`]. Do not use
//! it inside an async runtime; `reqwest::blocking` will panic there.

use url::Url;

use crate::client::{endpoint_url, ClientBuilder, Endpoint, RawResponse};
use crate::config::ClientConfig;
use crate::utils::error::Result;

/// Synchronous twin of [`crate::Client`].
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::blocking::Client,
    pub(crate) base_url: Url,
    pub(crate) token: Option<String>,
    pub(crate) error_on_unexpected_status: bool,
}

impl Client {
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build_blocking()
    }

    pub fn authenticated(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).token(token).build_blocking()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config)?.build_blocking()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn error_on_unexpected_status(&self) -> bool {
        self.error_on_unexpected_status
    }

    pub(crate) fn execute(&self, endpoint: Endpoint) -> Result<RawResponse> {
        let url = endpoint_url(&self.base_url, &endpoint)?;
        tracing::debug!("{} {}", endpoint.method, url);

        let mut request = self.http.request(endpoint.method.clone(), url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes()?.to_vec();
        tracing::debug!("{} {} -> {}", endpoint.method, endpoint.path, status);

        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }
}
