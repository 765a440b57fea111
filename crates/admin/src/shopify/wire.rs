//! Raw wire nodes returned by the Shopify Admin GraphQL API.
//!
//! Every field is optional and every struct defaults, so a partially
//! populated node (missing fields, explicit `null`s, numbers sent as strings)
//! still deserializes. Filling defaults is the conversion layer's job.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient scalar deserializers.
///
/// Shopify's `Money`/`Decimal` scalars are strings and counts are integers,
/// but proxies and older API versions are not always consistent about it.
pub mod lenient {
    use super::{Deserialize, Deserializer, Value};

    /// Accept a string or a number, anything else is `None`.
    ///
    /// # Errors
    ///
    /// Never fails on well-formed JSON.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Accept an integer, a float (truncated) or a numeric string.
    ///
    /// # Errors
    ///
    /// Never fails on well-formed JSON.
    pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                #[allow(clippy::cast_possible_truncation)] // Truncation is the intent
                n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

// =============================================================================
// Connections
// =============================================================================

/// A Relay-style connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection<T> {
    pub edges: Option<Vec<Edge<T>>>,
    pub page_info: Option<WirePageInfo>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: None,
            page_info: None,
        }
    }
}

impl<T> Connection<T> {
    /// Nodes in edge order; `null` edges and nodes are skipped.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| e.node)
            .collect()
    }

    /// Number of non-null nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges
            .as_deref()
            .map_or(0, |edges| edges.iter().filter(|e| e.node.is_some()).count())
    }
}

/// A connection edge.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Edge<T> {
    pub cursor: Option<String>,
    pub node: Option<T>,
}

impl<T> Default for Edge<T> {
    fn default() -> Self {
        Self {
            cursor: None,
            node: None,
        }
    }
}

/// Connection page info.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WirePageInfo {
    pub has_next_page: Option<bool>,
    pub has_previous_page: Option<bool>,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// A node that only carries its ID (used for counting).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireIdNode {
    pub id: Option<String>,
}

// =============================================================================
// Shared
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireMoney {
    #[serde(deserialize_with = "lenient::string")]
    pub amount: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireMoneyBag {
    pub shop_money: Option<WireMoney>,
    pub presentment_money: Option<WireMoney>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province_code: Option<String>,
    pub country_code_v2: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireAttribute {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireCustomer {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireVariantRef {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sku: Option<String>,
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireProduct {
    pub id: Option<String>,
    pub title: Option<String>,
    pub handle: Option<String>,
    pub description: Option<String>,
    pub product_type: Option<String>,
    pub vendor: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    #[serde(deserialize_with = "lenient::int")]
    pub total_inventory: Option<i64>,
    pub variants: Option<Connection<WireVariant>>,
    pub images: Option<Connection<WireImage>>,
    pub options: Option<Vec<WireProductOption>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireVariant {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub compare_at_price: Option<String>,
    #[serde(deserialize_with = "lenient::int")]
    pub inventory_quantity: Option<i64>,
    pub inventory_policy: Option<String>,
    pub selected_options: Option<Vec<WireSelectedOption>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireSelectedOption {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireProductOption {
    pub id: Option<String>,
    pub name: Option<String>,
    pub values: Option<Vec<String>>,
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireOrder {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub display_financial_status: Option<String>,
    pub display_fulfillment_status: Option<String>,
    pub currency_code: Option<String>,
    pub subtotal_price_set: Option<WireMoneyBag>,
    pub total_tax_set: Option<WireMoneyBag>,
    pub total_discounts_set: Option<WireMoneyBag>,
    pub total_price_set: Option<WireMoneyBag>,
    pub line_items: Option<Connection<WireLineItem>>,
    pub customer: Option<WireCustomer>,
    pub billing_address: Option<WireAddress>,
    pub shipping_address: Option<WireAddress>,
    pub tags: Option<Vec<String>>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireLineItem {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::int")]
    pub quantity: Option<i64>,
    pub original_unit_price_set: Option<WireMoneyBag>,
    pub discounted_unit_price_set: Option<WireMoneyBag>,
    pub variant: Option<WireVariantRef>,
    pub custom_attributes: Option<Vec<WireAttribute>>,
}

// =============================================================================
// Abandoned checkouts
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireAbandonedCheckout {
    pub id: Option<String>,
    pub abandoned_checkout_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub completed_at: Option<String>,
    pub total_price_set: Option<WireMoneyBag>,
    pub subtotal_price_set: Option<WireMoneyBag>,
    pub total_discount_set: Option<WireMoneyBag>,
    pub total_tax_set: Option<WireMoneyBag>,
    pub discount_codes: Option<Vec<String>>,
    pub custom_attributes: Option<Vec<WireAttribute>>,
    pub customer: Option<WireCustomer>,
    pub line_items: Option<Connection<WireLineItem>>,
    pub tax_lines: Option<Vec<WireTaxLine>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireTaxLine {
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub rate: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub rate_percentage: Option<String>,
    pub price_set: Option<WireMoneyBag>,
}

// =============================================================================
// Discounts
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireDiscountNode {
    pub id: Option<String>,
    pub discount: Option<WireCodeDiscount>,
}

/// Fields shared by every `DiscountCode*` union member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireCodeDiscount {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    #[serde(deserialize_with = "lenient::int")]
    pub usage_limit: Option<i64>,
    pub applies_once_per_customer: Option<bool>,
    pub codes: Option<Connection<WireRedeemCode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireRedeemCode {
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes() {
        let product: WireProduct = serde_json::from_value(json!({})).expect("deserialize");
        assert!(product.id.is_none());
        assert!(product.variants.is_none());
    }

    #[test]
    fn test_explicit_nulls_deserialize() {
        let order: WireOrder = serde_json::from_value(json!({
            "id": "gid://shopify/Order/1",
            "lineItems": null,
            "tags": null,
            "totalPriceSet": null,
        }))
        .expect("deserialize");
        assert!(order.line_items.is_none());
        assert!(order.tags.is_none());
    }

    #[test]
    fn test_lenient_numbers() {
        let variant: WireVariant = serde_json::from_value(json!({
            "price": 12.5,
            "inventoryQuantity": "7",
        }))
        .expect("deserialize");
        assert_eq!(variant.price.as_deref(), Some("12.5"));
        assert_eq!(variant.inventory_quantity, Some(7));

        let variant: WireVariant = serde_json::from_value(json!({
            "price": null,
            "inventoryQuantity": "lots",
        }))
        .expect("deserialize");
        assert!(variant.price.is_none());
        assert!(variant.inventory_quantity.is_none());
    }

    #[test]
    fn test_connection_skips_null_nodes() {
        let conn: Connection<WireIdNode> = serde_json::from_value(json!({
            "edges": [
                { "node": { "id": "a" } },
                { "node": null },
                { "cursor": "c", "node": { "id": "b" } },
            ],
        }))
        .expect("deserialize");
        assert_eq!(conn.node_count(), 2);
        let ids: Vec<_> = conn.into_nodes().into_iter().filter_map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_discount_typename() {
        let node: WireDiscountNode = serde_json::from_value(json!({
            "id": "gid://shopify/DiscountCodeNode/1",
            "discount": { "__typename": "DiscountCodeBasic", "title": "Spring" },
        }))
        .expect("deserialize");
        let discount = node.discount.expect("discount");
        assert_eq!(discount.typename.as_deref(), Some("DiscountCodeBasic"));
    }
}
