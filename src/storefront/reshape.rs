//! Pure mappings from provider records to canonical domain types.
//!
//! Nothing here performs I/O. Each function is total over its input: a record
//! missing optional data still maps, and only records without an identity
//! (no `id`) map to `None`.

use std::collections::HashMap;

use crate::storefront::provider::{
    CollectionListing, ProviderCart, ProviderCartItem, ProviderCollection, ProviderImage,
    ProviderProduct, ProviderVariant, OUT_OF_STOCK,
};
use crate::storefront::types::{
    Cart, CartCost, CartLine, CartMerchandise, CartProduct, Collection, Image, Money, PriceRange,
    Product, ProductOption, ProductVariant, SelectedOption,
};

fn money(amount: f64, currency: &str) -> Money {
    Money {
        amount: amount.to_string(),
        currency_code: currency.to_string(),
    }
}

fn is_available(stock_status: Option<&str>) -> bool {
    stock_status != Some(OUT_OF_STOCK)
}

fn non_empty(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.is_empty())
}

/// Maps a collection record: `slug` becomes `handle`, `name` becomes `title`.
#[must_use]
pub fn reshape_collection(raw: ProviderCollection) -> Collection {
    Collection {
        handle: raw.slug,
        title: raw.name,
        description: raw.description.unwrap_or_default(),
    }
}

/// Maps a collections listing, keeping provider order. An absent listing is empty.
#[must_use]
pub fn reshape_collections(listing: Option<CollectionListing>) -> Vec<Collection> {
    listing
        .map(CollectionListing::into_records)
        .unwrap_or_default()
        .into_iter()
        .map(reshape_collection)
        .collect()
}

/// Maps an image; images without a file URL are dropped.
#[must_use]
pub fn reshape_image(raw: ProviderImage) -> Option<Image> {
    let file = raw.file?;
    let url = file.url.filter(|url| !url.is_empty())?;
    Some(Image {
        url,
        alt_text: raw.caption,
        width: file.width,
        height: file.height,
    })
}

fn reshape_variant(
    raw: ProviderVariant,
    fallback_price: Option<f64>,
    currency: &str,
    option_values: &HashMap<&str, (&str, &str)>,
) -> ProductVariant {
    let selected_options = raw
        .option_value_ids
        .iter()
        .filter_map(|id| option_values.get(id.as_str()))
        .map(|(name, value)| SelectedOption {
            name: (*name).to_string(),
            value: (*value).to_string(),
        })
        .collect();

    ProductVariant {
        available_for_sale: is_available(raw.stock_status.as_deref()),
        price: money(raw.price.or(fallback_price).unwrap_or_default(), currency),
        id: raw.id,
        title: raw.name,
        selected_options,
    }
}

fn price_range(
    variants: &[ProviderVariant],
    product_price: Option<f64>,
    currency: &str,
) -> PriceRange {
    let base = product_price.unwrap_or_default();
    let prices: Vec<f64> = variants
        .iter()
        .map(|v| v.price.unwrap_or(base))
        .collect();

    if prices.is_empty() {
        return PriceRange {
            min_variant_price: money(base, currency),
            max_variant_price: money(base, currency),
        };
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    PriceRange {
        min_variant_price: money(min, currency),
        max_variant_price: money(max, currency),
    }
}

/// Maps a product record. Records without an `id` yield `None`.
#[must_use]
pub fn reshape_product(raw: ProviderProduct) -> Option<Product> {
    let id = non_empty(raw.id)?;
    let currency = raw.currency.unwrap_or_default();

    // option value id -> (option name, value name)
    let option_values: HashMap<&str, (&str, &str)> = raw
        .options
        .iter()
        .flat_map(|option| {
            option
                .values
                .iter()
                .map(move |value| (value.id.as_str(), (option.name.as_str(), value.name.as_str())))
        })
        .collect();

    let price_range = price_range(&raw.variants, raw.price, &currency);
    let available_for_sale = if raw.variants.is_empty() {
        is_available(raw.stock_status.as_deref())
    } else {
        raw.variants
            .iter()
            .any(|v| is_available(v.stock_status.as_deref()))
    };

    let variants = raw
        .variants
        .iter()
        .cloned()
        .map(|variant| reshape_variant(variant, raw.price, &currency, &option_values))
        .collect();

    let options = raw
        .options
        .iter()
        .map(|option| ProductOption {
            id: option.id.clone(),
            name: option.name.clone(),
            values: option.values.iter().map(|v| v.name.clone()).collect(),
        })
        .collect();

    let images: Vec<Image> = raw.images.into_iter().filter_map(reshape_image).collect();

    Some(Product {
        id,
        handle: raw.slug,
        available_for_sale,
        title: raw.name,
        description: raw.description.unwrap_or_default(),
        options,
        price_range,
        variants,
        featured_image: images.first().cloned(),
        images,
        tags: raw.tags,
        updated_at: raw.date_updated,
    })
}

/// Maps product records, dropping those without an identity.
#[must_use]
pub fn reshape_products(raw: Vec<ProviderProduct>) -> Vec<Product> {
    raw.into_iter().filter_map(reshape_product).collect()
}

fn line_total(item: &ProviderCartItem) -> f64 {
    item.price_total
        .unwrap_or_else(|| item.price.unwrap_or_default() * f64::from(item.quantity))
}

fn reshape_cart_line(raw: ProviderCartItem, currency: &str) -> CartLine {
    let cost = money(line_total(&raw), currency);
    let product = raw.product.unwrap_or_default();
    let product_id = raw.product_id.or(product.id).unwrap_or_default();
    let variant = raw.variant.unwrap_or_default();

    let merchandise_id = raw
        .variant_id
        .or(variant.id)
        .unwrap_or_else(|| product_id.clone());
    let title = if variant.name.is_empty() {
        product.name.clone()
    } else {
        variant.name
    };

    CartLine {
        id: raw.id,
        quantity: raw.quantity,
        cost,
        merchandise: CartMerchandise {
            id: merchandise_id,
            title,
            product: CartProduct {
                id: product_id,
                handle: product.slug,
                title: product.name,
                featured_image: product.images.into_iter().find_map(reshape_image),
            },
        },
    }
}

/// Maps a cart record. Records without an `id` yield `None`.
///
/// Totals the provider leaves out are derived from the lines.
#[must_use]
pub fn reshape_cart(raw: ProviderCart) -> Option<Cart> {
    let id = non_empty(raw.id)?;
    let currency = raw.currency.unwrap_or_default();

    let subtotal = raw
        .sub_total
        .unwrap_or_else(|| raw.items.iter().map(line_total).sum());
    let total_quantity = raw.item_quantity.unwrap_or_else(|| {
        raw.items
            .iter()
            .map(|item| item.quantity)
            .fold(0u32, u32::saturating_add)
    });
    let cost = CartCost {
        subtotal: money(subtotal, &currency),
        total: money(raw.grand_total.unwrap_or(subtotal), &currency),
        total_tax: raw.tax_total.map(|tax| money(tax, &currency)),
    };

    let lines = raw
        .items
        .into_iter()
        .map(|item| reshape_cart_line(item, &currency))
        .collect();

    Some(Cart {
        id,
        checkout_url: raw.checkout_url,
        total_quantity,
        cost,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn product_fixture() -> Value {
        json!({
            "id": "p-100",
            "slug": "classic-tee",
            "name": "Classic Tee",
            "description": "<p>Soft cotton.</p>",
            "price": 25.0,
            "currency": "USD",
            "tags": ["cotton", "summer"],
            "date_updated": "2024-06-15T10:30:00Z",
            "images": [
                {"file": {"url": "https://cdn.example.com/tee.jpg", "width": 800, "height": 600}, "caption": "Front"},
                {"file": null},
                {"file": {"url": "https://cdn.example.com/tee-back.jpg"}}
            ],
            "options": [
                {"id": "o-size", "name": "Size", "values": [
                    {"id": "ov-s", "name": "S"},
                    {"id": "ov-m", "name": "M"}
                ]}
            ],
            "variants": [
                {"id": "v-s", "name": "Classic Tee - S", "price": 22.5, "option_value_ids": ["ov-s"]},
                {"id": "v-m", "name": "Classic Tee - M", "option_value_ids": ["ov-m"], "stock_status": "out_of_stock"}
            ]
        })
    }

    fn product_from(value: Value) -> Option<Product> {
        reshape_product(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_reshape_collection_maps_fields_exactly() {
        let raw: ProviderCollection =
            serde_json::from_value(json!({"slug": "tees", "name": "T-Shirts", "description": "d"}))
                .unwrap();
        assert_eq!(
            reshape_collection(raw),
            Collection {
                handle: "tees".to_string(),
                title: "T-Shirts".to_string(),
                description: "d".to_string(),
            }
        );
    }

    #[test]
    fn test_reshape_collections_keeps_order_and_count() {
        let listing: CollectionListing = serde_json::from_value(json!({"results": [
            {"slug": "c", "name": "C"},
            {"slug": "a", "name": "A"},
            {"slug": "b", "name": "B", "description": null}
        ]}))
        .unwrap();

        let collections = reshape_collections(Some(listing));
        let handles: Vec<_> = collections.iter().map(|c| c.handle.as_str()).collect();
        assert_eq!(handles, vec!["c", "a", "b"]);
        assert_eq!(collections[2].description, "");
    }

    #[test]
    fn test_reshape_collections_absent_listing_is_empty() {
        assert!(reshape_collections(None).is_empty());
    }

    #[test]
    fn test_reshape_product_identity_and_display_fields() {
        let product = product_from(product_fixture()).unwrap();

        assert_eq!(product.id, "p-100");
        assert_eq!(product.handle, "classic-tee");
        assert_eq!(product.title, "Classic Tee");
        assert_eq!(product.description, "<p>Soft cotton.</p>");
        assert_eq!(product.tags, vec!["cotton", "summer"]);
        assert_eq!(
            product.updated_at.map(|t| t.to_rfc3339()),
            Some("2024-06-15T10:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_reshape_product_images_skip_missing_files() {
        let product = product_from(product_fixture()).unwrap();

        assert_eq!(product.images.len(), 2);
        let featured = product.featured_image.unwrap();
        assert_eq!(featured.url, "https://cdn.example.com/tee.jpg");
        assert_eq!(featured.alt_text.as_deref(), Some("Front"));
        assert_eq!(featured.width, Some(800));
        assert_eq!(product.images[1].height, None);
    }

    #[test]
    fn test_reshape_product_variants_and_selected_options() {
        let product = product_from(product_fixture()).unwrap();

        assert_eq!(product.options.len(), 1);
        assert_eq!(product.options[0].values, vec!["S", "M"]);

        let small = &product.variants[0];
        assert_eq!(small.id, "v-s");
        assert_eq!(small.price.amount, "22.5");
        assert_eq!(small.price.currency_code, "USD");
        assert!(small.available_for_sale);
        assert_eq!(
            small.selected_options,
            vec![SelectedOption {
                name: "Size".to_string(),
                value: "S".to_string(),
            }]
        );

        let medium = &product.variants[1];
        assert_eq!(medium.price.amount, "25");
        assert!(!medium.available_for_sale);
    }

    #[test]
    fn test_reshape_product_price_range_spans_variants() {
        let product = product_from(product_fixture()).unwrap();

        assert_eq!(product.price_range.min_variant_price.amount, "22.5");
        assert_eq!(product.price_range.max_variant_price.amount, "25");
        assert!(product.available_for_sale);
    }

    #[test]
    fn test_reshape_product_without_variants_uses_product_price() {
        let product = product_from(json!({
            "id": "p-2",
            "slug": "mug",
            "name": "Mug",
            "price": 12.99,
            "currency": "EUR",
            "stock_status": "out_of_stock"
        }))
        .unwrap();

        assert_eq!(
            product.price_range.min_variant_price,
            Money {
                amount: "12.99".to_string(),
                currency_code: "EUR".to_string(),
            }
        );
        assert_eq!(
            product.price_range.min_variant_price,
            product.price_range.max_variant_price
        );
        assert!(!product.available_for_sale);
        assert!(product.featured_image.is_none());
    }

    #[test]
    fn test_reshape_product_without_id_is_none() {
        assert!(product_from(json!({})).is_none());
        assert!(product_from(json!({"id": "", "slug": "x"})).is_none());
        assert!(product_from(json!({"error": "Not found"})).is_none());
    }

    #[test]
    fn test_reshape_products_drops_unidentified_records() {
        let raw: Vec<ProviderProduct> = serde_json::from_value(json!([
            {"id": "p1", "slug": "one"},
            {"slug": "orphan"},
            {"id": "p2", "slug": "two"}
        ]))
        .unwrap();

        let handles: Vec<_> = reshape_products(raw).into_iter().map(|p| p.handle).collect();
        assert_eq!(handles, vec!["one", "two"]);
    }

    #[test]
    fn test_reshape_cart_maps_lines_in_order() {
        let raw: ProviderCart = serde_json::from_value(json!({
            "id": "cart1",
            "checkout_url": "https://shop.example.com/checkout/cart1",
            "currency": "USD",
            "item_quantity": 3,
            "sub_total": 70.0,
            "tax_total": 5.6,
            "grand_total": 75.6,
            "items": [
                {
                    "id": "line-1",
                    "product_id": "p-100",
                    "variant_id": "v-s",
                    "quantity": 2,
                    "price": 22.5,
                    "price_total": 45.0,
                    "product": {"name": "Classic Tee", "slug": "classic-tee",
                        "images": [{"file": {"url": "https://cdn.example.com/tee.jpg"}}]},
                    "variant": {"name": "Classic Tee - S"}
                },
                {
                    "id": "line-2",
                    "product_id": "p-200",
                    "quantity": 1,
                    "price": 25.0,
                    "product": {"name": "Cap", "slug": "cap"}
                }
            ]
        }))
        .unwrap();

        let cart = reshape_cart(raw).unwrap();

        assert_eq!(cart.id, "cart1");
        assert_eq!(
            cart.checkout_url.as_deref(),
            Some("https://shop.example.com/checkout/cart1")
        );
        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.cost.subtotal.amount, "70");
        assert_eq!(cart.cost.total.amount, "75.6");
        assert_eq!(cart.cost.total_tax.unwrap().amount, "5.6");

        assert_eq!(cart.lines.len(), 2);
        let first = &cart.lines[0];
        assert_eq!(first.id, "line-1");
        assert_eq!(first.quantity, 2);
        assert_eq!(first.cost.amount, "45");
        assert_eq!(first.merchandise.id, "v-s");
        assert_eq!(first.merchandise.title, "Classic Tee - S");
        assert_eq!(first.merchandise.product.handle, "classic-tee");
        assert_eq!(
            first.merchandise.product.featured_image.as_ref().map(|i| i.url.as_str()),
            Some("https://cdn.example.com/tee.jpg")
        );

        let second = &cart.lines[1];
        assert_eq!(second.merchandise.id, "p-200");
        assert_eq!(second.merchandise.title, "Cap");
        assert_eq!(second.cost.amount, "25");
    }

    #[test]
    fn test_reshape_cart_derives_missing_totals() {
        let raw: ProviderCart = serde_json::from_value(json!({
            "id": "cart2",
            "currency": "GBP",
            "items": [
                {"id": "l1", "variant_id": "v1", "quantity": 2, "price": 10.0},
                {"id": "l2", "variant_id": "v2", "quantity": 1, "price": 5.5}
            ]
        }))
        .unwrap();

        let cart = reshape_cart(raw).unwrap();

        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.cost.subtotal.amount, "25.5");
        assert_eq!(cart.cost.total.amount, "25.5");
        assert_eq!(cart.cost.total.currency_code, "GBP");
        assert!(cart.cost.total_tax.is_none());
        assert!(cart.checkout_url.is_none());
    }

    #[test]
    fn test_reshape_empty_cart() {
        let raw: ProviderCart = serde_json::from_value(json!({"id": "new-cart", "items": []})).unwrap();
        let cart = reshape_cart(raw).unwrap();

        assert!(cart.lines.is_empty());
        assert_eq!(cart.total_quantity, 0);
        assert_eq!(cart.cost.total.amount, "0");
    }

    #[test]
    fn test_reshape_cart_uses_provider_quantity_for_huge_lines() {
        let raw: ProviderCart = serde_json::from_value(json!({
            "id": "c",
            "item_quantity": 7,
            "items": [
                {"id": "a", "quantity": 4_000_000_000u32},
                {"id": "b", "quantity": 4_000_000_000u32}
            ]
        }))
        .unwrap();

        let cart = reshape_cart(raw).unwrap();
        assert_eq!(cart.total_quantity, 7);
        assert_eq!(cart.lines.len(), 2);
    }

    #[test]
    fn test_reshape_cart_derived_quantity_saturates() {
        let raw: ProviderCart = serde_json::from_value(json!({
            "id": "c",
            "items": [
                {"id": "a", "quantity": 4_000_000_000u32},
                {"id": "b", "quantity": 4_000_000_000u32}
            ]
        }))
        .unwrap();

        assert_eq!(reshape_cart(raw).unwrap().total_quantity, u32::MAX);
    }

    #[test]
    fn test_reshape_cart_prefers_provider_subtotal() {
        let raw: ProviderCart = serde_json::from_value(json!({
            "id": "c",
            "currency": "USD",
            "sub_total": 12.0,
            "items": [{"id": "a", "quantity": 2, "price": 100.0}]
        }))
        .unwrap();

        let cart = reshape_cart(raw).unwrap();
        assert_eq!(cart.cost.subtotal.amount, "12");
        assert_eq!(cart.cost.total.amount, "12");
        assert_eq!(cart.lines[0].cost.amount, "200");
    }

    #[test]
    fn test_reshape_cart_without_id_is_none() {
        assert!(reshape_cart(ProviderCart::default()).is_none());
    }
}
