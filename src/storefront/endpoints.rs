//! Endpoint paths of the storefront provider.
//!
//! Dynamic segments are percent-encoded here, so callers can pass handles and
//! ids exactly as they received them.
//!
//! # Example
//!
//! ```rust
//! use storefront_client::storefront::endpoints::{self, CartAction};
//!
//! assert_eq!(endpoints::product("blue shirt"), "/v1/products/blue%20shirt");
//! assert_eq!(endpoints::cart_action("c1", CartAction::Add), "/v1/carts/c1/add");
//! ```

use std::fmt;

/// Listing of all collections.
pub const COLLECTIONS: &str = "/api/public/v1.0/collections";

/// Cart creation.
pub const CARTS: &str = "/v1/carts";

/// Cart mutations, each with its own sub-path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add items.
    Add,
    /// Remove items.
    Remove,
    /// Change item quantities.
    Change,
}

impl CartAction {
    /// Returns the path segment for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// Products of collection `collection`.
#[must_use]
pub fn collection_products(collection: &str) -> String {
    format!("/v1/collections/{}/products", segment(collection))
}

/// A single product by handle.
#[must_use]
pub fn product(handle: &str) -> String {
    format!("/v1/products/{}", segment(handle))
}

/// A single cart by id.
#[must_use]
pub fn cart(cart_id: &str) -> String {
    format!("{CARTS}/{}", segment(cart_id))
}

/// A mutation of cart `cart_id`.
#[must_use]
pub fn cart_action(cart_id: &str, action: CartAction) -> String {
    format!("{}/{action}", cart(cart_id))
}
