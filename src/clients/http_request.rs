//! HTTP request types for the storefront client.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! per-call [`RequestOptions`] (cache directive and header overrides).

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the storefront API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reading resources.
    Get,
    /// HTTP POST method for creating and mutating resources.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Cache directive for a single request.
///
/// [`CacheMode::NoStore`] sends `Cache-Control: no-store` so neither the
/// client nor any intermediary may answer from a stored response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// No cache directive is sent.
    #[default]
    Default,
    /// Every call must reach the provider.
    NoStore,
}

impl CacheMode {
    /// Returns the `Cache-Control` header value for this mode, if any.
    #[must_use]
    pub const fn header_value(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::NoStore => Some("no-store"),
        }
    }
}

/// Per-call overrides applied on top of the client's defaults.
///
/// Headers given here replace default headers of the same name, including
/// `Content-Type`.
///
/// # Example
///
/// ```rust
/// use storefront_client::clients::{CacheMode, RequestOptions};
///
/// let options = RequestOptions::no_store().header("X-Trace", "abc");
/// assert_eq!(options.cache, CacheMode::NoStore);
/// assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("abc"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Cache directive for the request.
    pub cache: CacheMode,
    /// Extra headers for the request.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Options with the `no-store` cache directive.
    #[must_use]
    pub fn no_store() -> Self {
        Self {
            cache: CacheMode::NoStore,
            ..Self::default()
        }
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// An HTTP request to be sent to the storefront API.
///
/// Use [`HttpRequest::builder`] to construct requests. Query parameters keep
/// their insertion order on the wire.
///
/// # Example
///
/// ```rust
/// use storefront_client::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/v1/products/tee")
///     .query_param("currency", "USD")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/v1/carts")
///     .body(json!({"items": []}))
///     .build()
///     .unwrap();
/// # let _ = (get_request, post_request);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the API base URL), starting with `/`.
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, String)>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Cache directive and header overrides.
    pub options: RequestOptions,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a POST has no body or a GET has
    /// one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method, &self.body) {
            (HttpMethod::Post, None) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (HttpMethod::Get, Some(_)) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    options: RequestOptions,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends a query parameter when `value` is present; does nothing otherwise.
    #[must_use]
    pub fn optional_query_param<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query_param(key, value.to_string()),
            None => self,
        }
    }

    /// Appends every present parameter of `params`, in order.
    #[must_use]
    pub fn query_params<'a, I>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<String>)>,
    {
        params
            .into_iter()
            .fold(self, |builder, (key, value)| builder.optional_query_param(key, value))
    }

    /// Replaces the per-call options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the cache directive.
    #[must_use]
    pub const fn cache(mut self, cache: CacheMode) -> Self {
        self.options.cache = cache;
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            options: self.options,
        };
        request.verify()?;
        Ok(request)
    }
}
