//! Storefront operations against the provider's REST API.
//!
//! This module provides:
//!
//! - [`StorefrontClient`]: collections, products and cart operations
//! - [`types`]: the canonical shapes returned to callers
//! - [`provider`]: the provider's wire schemas
//! - [`reshape`]: pure conversion from wire schemas to canonical shapes
//! - [`endpoints`]: provider paths
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_client::{CollectionProductsQuery, StorefrontClient, StorefrontConfig};
//!
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
//!
//! for collection in client.get_collections().await? {
//!     let query = CollectionProductsQuery::new(&collection.handle, "USD").limit(12);
//!     let products = client.get_collection_products(&query).await?;
//!     println!("{}: {} products", collection.title, products.len());
//! }
//! ```

mod client;
pub mod endpoints;
pub mod provider;
pub mod reshape;
pub mod types;

pub use client::StorefrontClient;
pub use types::{
    Cart, CartCost, CartLine, CartLineInput, CartLineUpdate, CartMerchandise, CartProduct,
    Collection, CollectionProductsQuery, Image, Money, PriceRange, Product, ProductOption,
    ProductQuery, ProductVariant, SelectedOption,
};
