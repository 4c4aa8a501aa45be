//! The storefront client: collections, products and carts.
//!
//! Every operation is one round trip: build the request, call the provider
//! through [`HttpClient`], reshape the body. Nothing is cached between calls
//! and the cart state lives on the provider side.

use crate::clients::{HttpClient, HttpError, HttpResponse, RequestOptions};
use crate::config::StorefrontConfig;
use crate::storefront::endpoints::{self, CartAction};
use crate::storefront::provider::{
    CartItemPayload, CartItemsPayload, CollectionListing, ProviderCart, ProviderPage,
    ProviderProduct,
};
use crate::storefront::reshape::{
    reshape_cart, reshape_collections, reshape_product, reshape_products,
};
use crate::storefront::types::{
    Cart, CartLineInput, CartLineUpdate, Collection, CollectionProductsQuery, Product,
    ProductQuery,
};

/// Client for the storefront provider's REST API.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Send + Sync`. Concurrent calls are fully
/// independent; the client does not order, deduplicate or coalesce them.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_client::{CartLineInput, ProductQuery, StorefrontClient, StorefrontConfig};
///
/// let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
///
/// if let Some(product) = client.get_product(&ProductQuery::new("classic-tee", "USD")).await? {
///     let cart = client.create_cart().await?.expect("provider returned a cart");
///     let line = CartLineInput::new(product.variants[0].id.clone(), 1);
///     client.add_to_cart(&cart.id, &[line]).await?;
/// }
/// ```
#[derive(Debug)]
pub struct StorefrontClient {
    http_client: HttpClient,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a new client from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created (see
    /// [`HttpClient::new`]).
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Lists all collections in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body is
    /// not a collections listing.
    pub async fn get_collections(&self) -> Result<Vec<Collection>, HttpError> {
        let response = self
            .http_client
            .get(endpoints::COLLECTIONS, [], RequestOptions::default())
            .await?;
        let listing: Option<CollectionListing> = response.decode()?;
        Ok(reshape_collections(listing))
    }

    /// Lists the products of a collection.
    ///
    /// A body without a `results` field means the collection is unknown: a
    /// warning is logged and an empty list is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded.
    pub async fn get_collection_products(
        &self,
        query: &CollectionProductsQuery,
    ) -> Result<Vec<Product>, HttpError> {
        let response = self
            .http_client
            .get(
                &endpoints::collection_products(&query.collection),
                [
                    ("currency", Some(query.currency.clone())),
                    ("limit", query.limit.map(|limit| limit.to_string())),
                    ("page", query.page.map(|page| page.to_string())),
                ],
                RequestOptions::default(),
            )
            .await?;

        let page: Option<ProviderPage<ProviderProduct>> = response.decode()?;
        match page.and_then(|page| page.results) {
            Some(results) => Ok(reshape_products(results)),
            None => {
                tracing::warn!(
                    collection = %query.collection,
                    status = response.code,
                    "no products found for collection"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Fetches one product by handle.
    ///
    /// Returns `Ok(None)` when the provider sends no usable product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded.
    pub async fn get_product(&self, query: &ProductQuery) -> Result<Option<Product>, HttpError> {
        let response = self
            .http_client
            .get(
                &endpoints::product(&query.handle),
                [("currency", Some(query.currency.clone()))],
                RequestOptions::default(),
            )
            .await?;

        let raw: Option<ProviderProduct> = response.decode()?;
        Ok(raw.and_then(reshape_product))
    }

    /// Fetches a cart.
    ///
    /// With no `cart_id` this returns `Ok(None)` without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded.
    pub async fn get_cart(
        &self,
        cart_id: Option<&str>,
        currency: &str,
    ) -> Result<Option<Cart>, HttpError> {
        let Some(cart_id) = cart_id else {
            return Ok(None);
        };

        let response = self
            .http_client
            .get(
                &endpoints::cart(cart_id),
                [("currency", Some(currency.to_string()))],
                RequestOptions::no_store(),
            )
            .await?;
        Self::cart_from(&response)
    }

    /// Creates an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded.
    pub async fn create_cart(&self) -> Result<Option<Cart>, HttpError> {
        self.mutate_cart(endpoints::CARTS, &CartItemsPayload::default())
            .await
    }

    /// Adds lines to a cart.
    ///
    /// Each line is sent as `{"variantId": merchandise_id, "quantity": quantity}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded. The error carries the payload.
    pub async fn add_to_cart(
        &self,
        cart_id: &str,
        lines: &[CartLineInput],
    ) -> Result<Option<Cart>, HttpError> {
        let payload = CartItemsPayload {
            items: lines
                .iter()
                .map(|line| CartItemPayload {
                    variant_id: &line.merchandise_id,
                    quantity: Some(line.quantity),
                })
                .collect(),
        };
        self.mutate_cart(&endpoints::cart_action(cart_id, CartAction::Add), &payload)
            .await
    }

    /// Removes items from a cart.
    ///
    /// Each id is sent as `{"variantId": id}` without a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded. The error carries the payload.
    pub async fn remove_from_cart<S: AsRef<str>>(
        &self,
        cart_id: &str,
        line_ids: &[S],
    ) -> Result<Option<Cart>, HttpError> {
        let payload = CartItemsPayload {
            items: line_ids
                .iter()
                .map(|id| CartItemPayload {
                    variant_id: id.as_ref(),
                    quantity: None,
                })
                .collect(),
        };
        self.mutate_cart(&endpoints::cart_action(cart_id, CartAction::Remove), &payload)
            .await
    }

    /// Changes line quantities in a cart.
    ///
    /// Each line is sent as `{"variantId": merchandise_id, "quantity": quantity}`.
    /// The provider resolves the line by variant; `CartLineUpdate::id` is not
    /// transmitted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request fails or the body
    /// cannot be decoded. The error carries the payload.
    pub async fn update_cart(
        &self,
        cart_id: &str,
        lines: &[CartLineUpdate],
    ) -> Result<Option<Cart>, HttpError> {
        let payload = CartItemsPayload {
            items: lines
                .iter()
                .map(|line| CartItemPayload {
                    variant_id: &line.merchandise_id,
                    quantity: Some(line.quantity),
                })
                .collect(),
        };
        self.mutate_cart(&endpoints::cart_action(cart_id, CartAction::Change), &payload)
            .await
    }

    async fn mutate_cart(
        &self,
        path: &str,
        payload: &CartItemsPayload<'_>,
    ) -> Result<Option<Cart>, HttpError> {
        let response = self
            .http_client
            .post(path, payload, RequestOptions::no_store())
            .await?;
        Self::cart_from(&response)
    }

    fn cart_from(response: &HttpResponse) -> Result<Option<Cart>, HttpError> {
        let raw: Option<ProviderCart> = response.decode()?;
        Ok(raw.and_then(reshape_cart))
    }
}
