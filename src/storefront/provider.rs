//! Provider wire schemas.
//!
//! These types mirror the JSON the storefront provider sends and expects.
//! Response types are lenient: every field the client can live without is
//! optional or defaulted, so a sparse body still decodes and the reshape
//! step decides what is usable. Request payload types serialize exactly to
//! the provider's cart item shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock status the provider uses for items that cannot be bought.
pub const OUT_OF_STOCK: &str = "out_of_stock";

/// A page of results.
///
/// `results` is absent when the provider does not know the requested
/// resource (for example an unknown collection).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderPage<T> {
    /// The records on this page.
    #[serde(default)]
    pub results: Option<Vec<T>>,
    /// Total number of records across pages.
    #[serde(default)]
    pub count: Option<u64>,
    /// Current page number.
    #[serde(default)]
    pub page: Option<u64>,
}

/// The collections listing, either a bare array or a page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CollectionListing {
    /// `[ {...}, ... ]`
    Bare(Vec<ProviderCollection>),
    /// `{ "results": [ {...}, ... ] }`
    Paged(ProviderPage<ProviderCollection>),
}

impl CollectionListing {
    /// Returns the collection records in provider order.
    #[must_use]
    pub fn into_records(self) -> Vec<ProviderCollection> {
        match self {
            Self::Bare(records) => records,
            Self::Paged(page) => page.results.unwrap_or_default(),
        }
    }
}

/// A collection record.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderCollection {
    pub id: Option<String>,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

/// An uploaded file reference.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderFile {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A product image.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderImage {
    pub file: Option<ProviderFile>,
    pub caption: Option<String>,
}

/// One value of a product option.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderOptionValue {
    pub id: String,
    pub name: String,
}

/// A product option.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderOption {
    pub id: String,
    pub name: String,
    pub values: Vec<ProviderOptionValue>,
}

/// A product variant.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProviderVariant {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub stock_status: Option<String>,
    pub option_value_ids: Vec<String>,
}

/// A product record.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProviderProduct {
    pub id: Option<String>,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub stock_status: Option<String>,
    pub images: Vec<ProviderImage>,
    pub options: Vec<ProviderOption>,
    pub variants: Vec<ProviderVariant>,
    pub tags: Vec<String>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// Product fields embedded in a cart item.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderCartProduct {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub images: Vec<ProviderImage>,
}

/// Variant fields embedded in a cart item.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderCartVariant {
    pub id: Option<String>,
    pub name: String,
}

/// A cart item.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProviderCartItem {
    pub id: String,
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
    pub quantity: u32,
    pub price: Option<f64>,
    pub price_total: Option<f64>,
    pub product: Option<ProviderCartProduct>,
    pub variant: Option<ProviderCartVariant>,
}

/// A cart record.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProviderCart {
    pub id: Option<String>,
    pub checkout_url: Option<String>,
    pub currency: Option<String>,
    pub items: Vec<ProviderCartItem>,
    pub item_quantity: Option<u32>,
    pub sub_total: Option<f64>,
    pub tax_total: Option<f64>,
    pub grand_total: Option<f64>,
}

/// One item of a cart mutation payload.
///
/// `quantity` is left out of the JSON when `None` (removal payloads).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItemPayload<'a> {
    pub variant_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Body of every cart POST: `{"items": [...]}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CartItemsPayload<'a> {
    pub items: Vec<CartItemPayload<'a>>,
}
