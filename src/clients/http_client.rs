//! HTTP client for storefront API communication.
//!
//! This module provides the [`HttpClient`] type, which owns token injection,
//! header merging and JSON parsing for every call the storefront client makes.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL};
use reqwest::Url;
use serde::Serialize;

use crate::clients::errors::{
    HttpError, InvalidHttpRequestError, TransportCause, TransportError,
};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestOptions};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiUrl, StorefrontConfig, StorefrontToken};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the query parameter carrying the storefront token.
pub const TOKEN_QUERY_PARAM: &str = "token";

/// HTTP client for making requests to the storefront API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Appending the storefront token as the last query parameter
/// - Default headers (`User-Agent`, `Accept`, `Content-Type`)
/// - Parsing every response body as JSON
///
/// It never retries and never inspects status codes.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_client::{HttpClient, StorefrontConfig};
/// use storefront_client::clients::RequestOptions;
///
/// let client = HttpClient::new(&StorefrontConfig::from_env()?);
/// let response = client
///     .get("/v1/products/tee", [("currency", Some("USD".to_string()))], RequestOptions::default())
///     .await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL of the provider API.
    api_url: ApiUrl,
    /// Token appended to every request.
    token: StorefrontToken,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.api_url().clone(),
            token: config.token().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL `request` will be sent to.
    ///
    /// The request's query parameters come first, in order, followed by the
    /// storefront token.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> Url {
        let mut url = self.api_url.join_path(&request.path);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(TOKEN_QUERY_PARAM, self.token.as_ref());
        }
        url
    }

    /// Issues a GET request.
    ///
    /// `query` lists parameters in the order they are sent; `None` values are
    /// left out.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] on network failure or an unparseable
    /// body. The error carries the requested URL.
    pub async fn get<'a, I>(
        &self,
        path: &str,
        query: I,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError>
    where
        I: IntoIterator<Item = (&'a str, Option<String>)>,
    {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query_params(query)
            .options(options)
            .build()?;
        self.request(request).await
    }

    /// Issues a POST request with `payload` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] on network failure or an unparseable
    /// body. The error carries the requested URL and the payload.
    pub async fn post<P>(
        &self,
        path: &str,
        payload: &P,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload).map_err(|e| {
            let url = self.api_url.join_path(path);
            TransportError::new(TransportCause::Encode(e), url.as_str())
        })?;
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .options(options)
            .build()?;
        self.request(request).await
    }

    /// Sends an HTTP request to the storefront API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and token injection
    /// - Header merging (per-call headers win over defaults)
    /// - Response parsing
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be sent or the body cannot be read or parsed
    ///   (`Transport`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        let headers = self.merge_headers(&request.options)?;
        let fail = |cause: TransportCause| {
            TransportError::new(cause, url.as_str()).with_payload(request.body.clone())
        };

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
        };
        req_builder = req_builder.headers(headers);
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending storefront request");

        let res = req_builder
            .send()
            .await
            .map_err(|e| fail(TransportCause::Network(e)))?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res
            .text()
            .await
            .map_err(|e| fail(TransportCause::Network(e)))?;

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text).map_err(|e| {
                tracing::warn!(path = %request.path, status = code, error = %e, "response body is not valid JSON");
                fail(TransportCause::Decode(e))
            })?
        };

        tracing::debug!(path = %request.path, status = code, "received storefront response");

        Ok(HttpResponse::new(code, res_headers, body).with_url(url.as_str()))
    }

    /// Merges default headers, the cache directive and per-call headers.
    fn merge_headers(&self, options: &RequestOptions) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();
        let mut insert = |name: &str, value: &str| -> Result<(), InvalidHttpRequestError> {
            let invalid = || InvalidHttpRequestError::InvalidHeader {
                name: name.to_string(),
            };
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(name, value);
            Ok(())
        };

        for (key, value) in &self.default_headers {
            insert(key, value)?;
        }
        if let Some(directive) = options.cache.header_value() {
            insert(CACHE_CONTROL.as_str(), directive)?;
        }
        for (key, value) in &options.headers {
            insert(key, value)?;
        }

        Ok(headers)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
