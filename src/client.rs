use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::config::ClientConfig;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation;

const DEFAULT_TIMEOUT_SEC: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("treehole-client/", env!("CARGO_PKG_VERSION"));

/// Description of a single API request: method, path relative to the base
/// URL, query pairs and an optional JSON body. Endpoint modules build these;
/// [`Client::execute`] turns them into exactly one HTTP exchange.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl Endpoint {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn push_query(&mut self, key: &'static str, value: impl ToString) {
        self.query.push((key, value.to_string()));
    }

    pub(crate) fn with_json(mut self, body: &impl serde::Serialize) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Status, headers and raw body of one exchange, before any decoding.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content: Vec<u8>,
}

pub(crate) fn endpoint_url(base_url: &Url, endpoint: &Endpoint) -> Result<Url> {
    // The base may carry a path prefix (e.g. "/api"), so the endpoint path
    // is concatenated rather than joined.
    let mut url = Url::parse(&format!(
        "{}{}",
        base_url.as_str().trim_end_matches('/'),
        endpoint.path
    ))?;
    if !endpoint.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &endpoint.query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Asynchronous API client.
///
/// Holds the base URL, an optional bearer token and the policy for
/// undocumented status codes. Cloning is cheap; the underlying
/// `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    error_on_unexpected_status: bool,
}

impl Client {
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Unauthenticated client with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Client sending `Authorization: Bearer <token>` on every request.
    pub fn authenticated(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).token(token).build()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config)?.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn error_on_unexpected_status(&self) -> bool {
        self.error_on_unexpected_status
    }

    pub(crate) async fn execute(&self, endpoint: Endpoint) -> Result<RawResponse> {
        let url = endpoint_url(&self.base_url, &endpoint)?;
        tracing::debug!("{} {}", endpoint.method, url);

        let mut request = self.http.request(endpoint.method.clone(), url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();
        tracing::debug!("{} {} -> {}", endpoint.method, endpoint.path, status);

        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }
}

/// Builder for [`Client`] and [`crate::blocking::Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    user_agent: String,
    error_on_unexpected_status: bool,
}

impl ClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            error_on_unexpected_status: true,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::new(config.api.base_url.clone());
        if let Some(token) = &config.api.token {
            builder = builder.token(token);
        }
        if let Some(secs) = config.api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.api.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &config.api.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(flag) = config.api.error_on_unexpected_status {
            builder = builder.error_on_unexpected_status(flag);
        }
        Ok(builder)
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whether an undocumented status code is an error (`true`, default) or
    /// produces an empty parse result.
    pub fn error_on_unexpected_status(mut self, flag: bool) -> Self {
        self.error_on_unexpected_status = flag;
        self
    }

    fn validated(&self) -> Result<(Url, HeaderMap)> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(token) = &self.token {
            validation::validate_non_empty_string("token", token)?;
            validation::validate_no_whitespace("token", token)?;
        }

        let base_url = Url::parse(&self.base_url)?;

        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&self.user_agent).map_err(|e| ApiError::InvalidConfigValue {
                field: "user_agent".to_string(),
                value: self.user_agent.clone(),
                reason: e.to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        Ok((base_url, headers))
    }

    pub fn build(self) -> Result<Client> {
        let (base_url, headers) = self.validated()?;

        let mut http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout);
        if let Some(connect_timeout) = self.connect_timeout {
            http = http.connect_timeout(connect_timeout);
        }

        Ok(Client {
            http: http.build()?,
            base_url,
            token: self.token,
            error_on_unexpected_status: self.error_on_unexpected_status,
        })
    }

    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::Client> {
        let (base_url, headers) = self.validated()?;

        let mut http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout);
        if let Some(connect_timeout) = self.connect_timeout {
            http = http.connect_timeout(connect_timeout);
        }

        Ok(crate::blocking::Client {
            http: http.build()?,
            base_url,
            token: self.token,
            error_on_unexpected_status: self.error_on_unexpected_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        assert!(Client::new("not a url").is_err());
        assert!(Client::new("ftp://hole.example.com").is_err());
    }

    #[test]
    fn test_builder_rejects_token_with_whitespace() {
        assert!(Client::authenticated("https://hole.example.com", "a b c").is_err());
        assert!(Client::authenticated("https://hole.example.com", "abc").is_ok());
    }

    #[test]
    fn test_endpoint_url_concatenates_base_path() {
        let base = Url::parse("https://hole.example.com/api/").unwrap();
        let mut endpoint = Endpoint::new(Method::GET, "/holes");
        endpoint.push_query("length", 10);

        let url = endpoint_url(&base, &endpoint).unwrap();
        assert_eq!(url.as_str(), "https://hole.example.com/api/holes?length=10");
    }

    #[test]
    fn test_endpoint_url_without_query() {
        let base = Url::parse("https://hole.example.com").unwrap();
        let endpoint = Endpoint::new(Method::GET, "/divisions/1");

        let url = endpoint_url(&base, &endpoint).unwrap();
        assert_eq!(url.as_str(), "https://hole.example.com/divisions/1");
    }
}
