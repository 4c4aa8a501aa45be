//! Canonical storefront domain types.
//!
//! These are the shapes handed to the storefront application. They are
//! independent of the provider's wire format (see
//! [`provider`](super::provider)) and are produced by the pure functions in
//! [`reshape`](super::reshape). All of them are plain values: the client
//! keeps no copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A currency-qualified amount.
///
/// The amount is kept as a string so no precision is lost on the way to the
/// presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// The decimal amount.
    pub amount: String,
    /// The three-letter ISO 4217 currency code.
    pub currency_code: String,
}

/// A named group of products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collection {
    /// URL-safe identifier.
    pub handle: String,
    /// Display name.
    pub title: String,
    /// Free-form description; empty when the provider has none.
    pub description: String,
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Absolute URL of the image file.
    pub url: String,
    /// Alternative text.
    pub alt_text: Option<String>,
    /// Width in pixels, when known.
    pub width: Option<u32>,
    /// Height in pixels, when known.
    pub height: Option<u32>,
}

/// A configurable product option such as size or color.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    /// Option id.
    pub id: String,
    /// Option name, e.g. "Size".
    pub name: String,
    /// Allowed values in display order.
    pub values: Vec<String>,
}

/// One option value chosen by a variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SelectedOption {
    /// Option name, e.g. "Size".
    pub name: String,
    /// Chosen value, e.g. "M".
    pub value: String,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant id, used as the merchandise id when adding to a cart.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Whether the variant can currently be bought.
    pub available_for_sale: bool,
    /// The option values this variant represents.
    pub selected_options: Vec<SelectedOption>,
    /// Unit price.
    pub price: Money,
}

/// Lowest and highest variant price of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    /// The cheapest variant price.
    pub min_variant_price: Money,
    /// The most expensive variant price.
    pub max_variant_price: Money,
}

/// A product in the canonical shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Provider id.
    pub id: String,
    /// URL-safe identifier.
    pub handle: String,
    /// Whether any variant (or the product itself) can be bought.
    pub available_for_sale: bool,
    /// Display name.
    pub title: String,
    /// Description as sent by the provider (may contain HTML).
    pub description: String,
    /// Configurable options.
    pub options: Vec<ProductOption>,
    /// Price span across variants.
    pub price_range: PriceRange,
    /// Purchasable variants.
    pub variants: Vec<ProductVariant>,
    /// First image, if any.
    pub featured_image: Option<Image>,
    /// All images in provider order.
    pub images: Vec<Image>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Last modification time reported by the provider.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The product a cart line belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product id.
    pub id: String,
    /// Product handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// First product image, if any.
    pub featured_image: Option<Image>,
}

/// The merchandise (variant) a cart line refers to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CartMerchandise {
    /// Variant id, or the product id for products without variants.
    pub id: String,
    /// Variant title.
    pub title: String,
    /// The owning product.
    pub product: CartProduct,
}

/// One line of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CartLine {
    /// Line id.
    pub id: String,
    /// Number of units.
    pub quantity: u32,
    /// Total for this line.
    pub cost: Money,
    /// What is being bought.
    pub merchandise: CartMerchandise,
}

/// Cost summary of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    /// Sum of line totals before tax and discounts.
    pub subtotal: Money,
    /// Amount due.
    pub total: Money,
    /// Tax portion, when the provider reports one.
    pub total_tax: Option<Money>,
}

/// A cart in the canonical shape.
///
/// Line order follows the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart id.
    pub id: String,
    /// Where to send the buyer to pay, if the provider exposes it.
    pub checkout_url: Option<String>,
    /// Total number of units across lines.
    pub total_quantity: u32,
    /// Cost summary.
    pub cost: CartCost,
    /// Lines in provider order.
    pub lines: Vec<CartLine>,
}

/// A line to add to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineInput {
    /// Variant to add.
    pub merchandise_id: String,
    /// Number of units.
    pub quantity: u32,
}

impl CartLineInput {
    /// Creates a new line input.
    #[must_use]
    pub fn new(merchandise_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            merchandise_id: merchandise_id.into(),
            quantity,
        }
    }
}

/// A quantity change for an existing cart line.
///
/// `id` identifies the line on the caller's side; only `merchandise_id` and
/// `quantity` reach the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineUpdate {
    /// Existing line id.
    pub id: String,
    /// Variant of the line.
    pub merchandise_id: String,
    /// New number of units; `0` asks the provider to drop the line.
    pub quantity: u32,
}

impl CartLineUpdate {
    /// Creates a new line update.
    #[must_use]
    pub fn new(id: impl Into<String>, merchandise_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            merchandise_id: merchandise_id.into(),
            quantity,
        }
    }
}

/// Parameters for listing the products of a collection.
///
/// # Example
///
/// ```rust
/// use storefront_client::CollectionProductsQuery;
///
/// let query = CollectionProductsQuery::new("tees", "USD").limit(12).page(2);
/// assert_eq!(query.limit, Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionProductsQuery {
    /// Collection handle.
    pub collection: String,
    /// Currency prices should be returned in.
    pub currency: String,
    /// Maximum number of products, provider default when `None`.
    pub limit: Option<u32>,
    /// Page number (1-based), provider default when `None`.
    pub page: Option<u32>,
}

impl CollectionProductsQuery {
    /// Creates a query without limit or page.
    #[must_use]
    pub fn new(collection: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            currency: currency.into(),
            limit: None,
            page: None,
        }
    }

    /// Sets the maximum number of products.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Parameters for fetching one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Product handle.
    pub handle: String,
    /// Currency prices should be returned in.
    pub currency: String,
}

impl ProductQuery {
    /// Creates a new product query.
    #[must_use]
    pub fn new(handle: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            currency: currency.into(),
        }
    }
}
