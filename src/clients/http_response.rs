//! HTTP response types for the storefront client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{TransportCause, TransportError};

/// A parsed response from the storefront API.
///
/// The body is returned whatever the status code; callers that care about
/// `4xx`/`5xx` check [`is_ok`](Self::is_ok) themselves. An empty body is
/// represented as JSON `null`.
///
/// # Example
///
/// ```rust
/// use storefront_client::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let response = HttpResponse::new(404, HashMap::new(), json!({"error": "not found"}));
/// assert!(!response.is_ok());
/// assert_eq!(response.body["error"], "not found");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// The URL that produced this response.
    pub url: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are expected to be lowercase already.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            url: String::new(),
        }
    }

    /// Records the URL that produced this response.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] with a [`TransportCause::Decode`] cause and
    /// this response's URL if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        T::deserialize(&self.body).map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "unexpected response shape");
            TransportError::new(TransportCause::Decode(e), self.url.clone())
        })
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Useful when reporting a problem to the provider.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns `true` if the provider sent no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(299, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_is_not_ok_for_other_codes() {
        assert!(!HttpResponse::new(199, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("content-type", "application/json")]),
            json!({}),
        );
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_request_id_returns_first_value() {
        let response = HttpResponse::new(
            500,
            headers(&[("x-request-id", "abc-123"), ("x-request-id", "def-456")]),
            json!(null),
        );
        assert_eq!(response.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_decode_into_typed_value() {
        #[derive(serde::Deserialize)]
        struct Listing {
            count: u32,
        }

        let response = HttpResponse::new(200, HashMap::new(), json!({"count": 3}));
        let listing: Listing = response.decode().unwrap();
        assert_eq!(listing.count, 3);
    }

    #[test]
    fn test_decode_failure_carries_url() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"count": "three"}))
            .with_url("https://api.example.com/v1/x?token=");

        let error = response.decode::<HashMap<String, u32>>().unwrap_err();
        assert!(error.is_decode());
        assert_eq!(error.url, "https://api.example.com/v1/x?token=");
    }

    #[test]
    fn test_is_empty_for_null_body() {
        assert!(HttpResponse::new(200, HashMap::new(), serde_json::Value::Null).is_empty());
        assert!(!HttpResponse::new(200, HashMap::new(), json!({})).is_empty());
    }
}
