//! # Storefront Client
//!
//! An async client for a headless storefront provider's REST API, returning
//! collections, products and carts in one canonical shape.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - Validated newtypes for the API base URL and the storefront token
//! - A JSON HTTP client that appends the token to every request
//! - Catalog reads: collections, collection products, single products
//! - Cart operations: fetch, create, add, remove, update
//! - Pure reshape functions from the provider's wire format to canonical types
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_client::{ApiUrl, StorefrontConfig, StorefrontToken};
//!
//! let config = StorefrontConfig::builder()
//!     .api_url(ApiUrl::new("https://shop.example.com").unwrap())
//!     .token(StorefrontToken::new("pk_live_123"))
//!     .build();
//!
//! assert_eq!(config.api_url().as_ref(), "https://shop.example.com");
//! ```
//!
//! ## Configuration From the Environment
//!
//! [`StorefrontConfig::from_env`] reads `STOREFRONT_API_URL` and
//! `STOREFRONT_TOKEN`. An unset URL falls back to
//! [`config::DEFAULT_API_URL`]; an unset token is sent as an empty value.
//!
//! ## Carts
//!
//! ```rust,ignore
//! use storefront_client::{CartLineInput, CartLineUpdate, StorefrontClient, StorefrontConfig};
//!
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
//!
//! let cart = client.create_cart().await?.expect("provider returned a cart");
//! client.add_to_cart(&cart.id, &[CartLineInput::new("variant-1", 2)]).await?;
//! client
//!     .update_cart(&cart.id, &[CartLineUpdate::new("line-1", "variant-1", 3)])
//!     .await?;
//! client.remove_from_cart(&cart.id, &["variant-1"]).await?;
//!
//! // No id, no request.
//! assert!(client.get_cart(None, "USD").await?.is_none());
//! ```
//!
//! ## Errors
//!
//! Every network operation returns [`HttpError`]. Transport failures carry a
//! [`TransportError`] with the cause, the requested URL and, for POSTs, the
//! payload that was sent. Non-2xx statuses are not errors: the body is
//! reshaped like any other.
//!
//! ## Thread Safety
//!
//! All public types are `Send + Sync`.

pub mod clients;
pub mod config;
pub mod error;
pub mod storefront;

// Re-export public types at crate root for convenience
pub use config::{ApiUrl, StorefrontConfig, StorefrontConfigBuilder, StorefrontToken};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    CacheMode, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RequestOptions, TransportCause, TransportError,
};

// Re-export storefront types
pub use storefront::{
    Cart, CartCost, CartLine, CartLineInput, CartLineUpdate, CartMerchandise, CartProduct,
    Collection, CollectionProductsQuery, Image, Money, PriceRange, Product, ProductOption,
    ProductQuery, ProductVariant, SelectedOption, StorefrontClient,
};
