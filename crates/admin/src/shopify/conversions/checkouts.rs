//! Abandoned checkout conversion functions.

use backoffice_core::parse_amount;
use rust_decimal::Decimal;

use crate::shopify::types::{AbandonedCheckout, CheckoutLineItem, TaxLine};
use crate::shopify::wire::{WireAbandonedCheckout, WireLineItem, WireTaxLine};

use super::{convert_attributes, convert_customer, convert_money_bag, convert_quantity, convert_variant_ref};

/// Convert an abandoned checkout node. Customer PII is always placeholder.
pub fn convert_abandoned_checkout(checkout: WireAbandonedCheckout) -> AbandonedCheckout {
    AbandonedCheckout {
        id: checkout.id.unwrap_or_default(),
        recovery_url: checkout.abandoned_checkout_url.unwrap_or_default(),
        created_at: checkout.created_at,
        updated_at: checkout.updated_at,
        completed_at: checkout.completed_at,
        total_price_set: convert_money_bag(checkout.total_price_set.as_ref()),
        subtotal_price_set: convert_money_bag(checkout.subtotal_price_set.as_ref()),
        total_discount_set: convert_money_bag(checkout.total_discount_set.as_ref()),
        total_tax_set: convert_money_bag(checkout.total_tax_set.as_ref()),
        discount_codes: checkout
            .discount_codes
            .unwrap_or_default()
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect(),
        custom_attributes: convert_attributes(checkout.custom_attributes.as_deref()),
        customer: convert_customer(checkout.customer.as_ref()),
        line_items: checkout
            .line_items
            .map(|c| c.into_nodes())
            .unwrap_or_default()
            .into_iter()
            .map(convert_checkout_line_item)
            .collect(),
        tax_lines: checkout
            .tax_lines
            .unwrap_or_default()
            .into_iter()
            .map(convert_tax_line)
            .collect(),
    }
}

/// Convert a checkout line item. A missing discounted price mirrors the original.
pub fn convert_checkout_line_item(item: WireLineItem) -> CheckoutLineItem {
    let original_unit_price_set = convert_money_bag(item.original_unit_price_set.as_ref());
    let discounted_unit_price_set = item
        .discounted_unit_price_set
        .as_ref()
        .map_or_else(
            || original_unit_price_set.clone(),
            |bag| convert_money_bag(Some(bag)),
        );
    CheckoutLineItem {
        id: item.id.unwrap_or_default(),
        title: item.title.unwrap_or_default(),
        quantity: convert_quantity(item.quantity),
        variant: convert_variant_ref(item.variant.as_ref()),
        original_unit_price_set,
        discounted_unit_price_set,
        custom_attributes: convert_attributes(item.custom_attributes.as_deref()),
    }
}

/// Convert a tax line. `rate_percentage` is `rate * 100` when the wire omits it.
pub fn convert_tax_line(line: WireTaxLine) -> TaxLine {
    let rate = parse_amount(line.rate.as_deref());
    let rate_percentage = line
        .rate_percentage
        .as_deref()
        .map(|raw| parse_amount(Some(raw)))
        .filter(|p| !p.is_zero() || rate.is_zero())
        .unwrap_or_else(|| (rate * Decimal::ONE_HUNDRED).normalize());
    TaxLine {
        title: line.title.unwrap_or_default(),
        rate,
        rate_percentage,
        price_set: convert_money_bag(line.price_set.as_ref()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shopify::types::{PLACEHOLDER_EMAIL, PLACEHOLDER_FIRST_NAME, PLACEHOLDER_PHONE};
    use serde_json::json;

    fn checkout(value: serde_json::Value) -> AbandonedCheckout {
        convert_abandoned_checkout(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_empty_checkout_defaults() {
        let converted = checkout(json!({}));
        assert_eq!(converted.recovery_url, "");
        assert_eq!(converted.total_price_set.shop_money.amount, "0.00");
        assert_eq!(converted.total_price_set.presentment_money.currency_code, "USD");
        assert!(converted.discount_codes.is_empty());
        assert!(converted.line_items.is_empty());
        assert!(converted.tax_lines.is_empty());
        assert!(converted.customer.is_none());
        assert!(!converted.is_recovered());
    }

    #[test]
    fn test_checkout_customer_is_scrubbed() {
        let converted = checkout(json!({
            "id": "gid://shopify/AbandonedCheckout/5",
            "customer": { "id": "gid://shopify/Customer/3", "email": "real@person.com" },
        }));
        let customer = converted.customer.unwrap();
        assert_eq!(customer.id, "gid://shopify/Customer/3");
        assert_eq!(customer.first_name, PLACEHOLDER_FIRST_NAME);
        assert_eq!(customer.email, PLACEHOLDER_EMAIL);
        assert_eq!(customer.phone, PLACEHOLDER_PHONE);
    }

    #[test]
    fn test_full_checkout() {
        let converted = checkout(json!({
            "id": "gid://shopify/AbandonedCheckout/5",
            "abandonedCheckoutUrl": "https://shop.example/recover/abc",
            "completedAt": "2024-05-02T10:00:00Z",
            "discountCodes": ["SPRING", ""],
            "customAttributes": [{ "key": "source", "value": "ig" }],
            "totalPriceSet": {
                "shopMoney": { "amount": "30.00", "currencyCode": "USD" },
                "presentmentMoney": { "amount": "40.50", "currencyCode": "CAD" },
            },
            "lineItems": { "edges": [{ "node": {
                "id": "li",
                "title": "Tee",
                "quantity": 3,
                "originalUnitPriceSet": { "shopMoney": { "amount": "10.00", "currencyCode": "USD" } },
                "discountedUnitPriceSet": { "shopMoney": { "amount": "8.00", "currencyCode": "USD" } },
            } }] },
            "taxLines": [{ "title": "GST", "rate": 0.05, "priceSet": { "shopMoney": { "amount": "1.50" } } }],
        }));
        assert_eq!(converted.recovery_url, "https://shop.example/recover/abc");
        assert!(converted.is_recovered());
        assert_eq!(converted.discount_codes, vec!["SPRING"]);
        assert_eq!(converted.custom_attributes[0].value, "ig");
        assert_eq!(converted.total_price_set.presentment_money.amount, "40.50");
        assert_eq!(converted.total_price_set.presentment_money.currency_code, "CAD");
        assert_eq!(converted.item_count(), 3);

        let item = &converted.line_items[0];
        assert_eq!(item.original_unit_price_set.shop_money.amount, "10.00");
        assert_eq!(item.discounted_unit_price_set.shop_money.amount, "8.00");

        let tax = &converted.tax_lines[0];
        assert_eq!(tax.title, "GST");
        assert_eq!(tax.rate, Decimal::new(5, 2));
        assert_eq!(tax.rate_percentage, Decimal::new(5, 0));
        assert_eq!(tax.price_set.shop_money.amount, "1.50");
    }

    #[test]
    fn test_tax_line_keeps_wire_percentage() {
        let line = convert_tax_line(
            serde_json::from_value(json!({ "rate": "0.13", "ratePercentage": "13.0" })).unwrap(),
        );
        assert_eq!(line.rate_percentage, Decimal::new(130, 1));
    }

    #[test]
    fn test_line_item_discounted_price_falls_back() {
        let item = convert_checkout_line_item(
            serde_json::from_value(json!({
                "originalUnitPriceSet": { "shopMoney": { "amount": "9.99", "currencyCode": "USD" } },
            }))
            .unwrap(),
        );
        assert_eq!(item.discounted_unit_price_set, item.original_unit_price_set);
        assert_eq!(item.quantity, 0);
    }
}
