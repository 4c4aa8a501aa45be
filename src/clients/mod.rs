//! HTTP client types for storefront API communication.
//!
//! This module is the transport layer under [`StorefrontClient`](crate::StorefrontClient).
//! Every provider call goes through [`HttpClient::get`] or [`HttpClient::post`],
//! which share one request path for token injection, header merging and JSON
//! parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a status code plus parsed JSON body
//! - [`RequestOptions`] / [`CacheMode`]: per-call overrides
//! - [`HttpError`] / [`TransportError`]: failures
//!
//! # Failure Behavior
//!
//! There is no retry. A network failure or a body that is not JSON becomes a
//! [`TransportError`] carrying the requested URL (and the payload for POST).
//! Non-2xx statuses are returned like any other response.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError, TransportCause, TransportError};
pub use http_client::{HttpClient, SDK_VERSION, TOKEN_QUERY_PARAM};
pub use http_request::{CacheMode, HttpMethod, HttpRequest, HttpRequestBuilder, RequestOptions};
pub use http_response::HttpResponse;
