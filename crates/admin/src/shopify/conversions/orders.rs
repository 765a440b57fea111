//! Order conversion functions.

use backoffice_core::parse_order_number;

use crate::shopify::types::{DEFAULT_CURRENCY, FinancialStatus, FulfillmentStatus, LineItem, Order};
use crate::shopify::wire::{WireLineItem, WireOrder};

use super::{
    convert_address, convert_attributes, convert_customer, convert_money_bag, convert_quantity,
    convert_variant_ref, shop_amount,
};

/// Convert an order node.
pub fn convert_order(order: WireOrder) -> Order {
    let name = order.name.unwrap_or_default();
    let total_price_set = convert_money_bag(order.total_price_set.as_ref());

    let currency_code = order
        .currency_code
        .filter(|c| !c.is_empty())
        .or_else(|| {
            order
                .total_price_set
                .as_ref()
                .and_then(|bag| bag.shop_money.as_ref())
                .and_then(|m| m.currency_code.clone())
        })
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    Order {
        id: order.id.unwrap_or_default(),
        order_number: parse_order_number(&name),
        name,
        created_at: order.created_at,
        updated_at: order.updated_at,
        financial_status: order
            .display_financial_status
            .as_deref()
            .map_or_else(FinancialStatus::default, FinancialStatus::from_wire),
        fulfillment_status: order
            .display_fulfillment_status
            .as_deref()
            .map_or_else(FulfillmentStatus::default, FulfillmentStatus::from_wire),
        currency_code,
        subtotal_price: shop_amount(order.subtotal_price_set.as_ref()),
        total_tax: shop_amount(order.total_tax_set.as_ref()),
        total_discounts: shop_amount(order.total_discounts_set.as_ref()),
        total_price: total_price_set.shop_money.amount,
        line_items: order
            .line_items
            .map(|c| c.into_nodes())
            .unwrap_or_default()
            .into_iter()
            .map(convert_line_item)
            .collect(),
        customer: convert_customer(order.customer.as_ref()),
        billing_address: convert_address(order.billing_address.as_ref()),
        shipping_address: convert_address(order.shipping_address.as_ref()),
        tags: order.tags.unwrap_or_default().join(", "),
        note: order.note.filter(|n| !n.is_empty()),
    }
}

/// Convert an order line item. Unit price is the shop-currency original price.
pub fn convert_line_item(item: WireLineItem) -> LineItem {
    LineItem {
        id: item.id.unwrap_or_default(),
        title: item.title.unwrap_or_default(),
        quantity: convert_quantity(item.quantity),
        price: shop_amount(item.original_unit_price_set.as_ref()),
        variant: convert_variant_ref(item.variant.as_ref()),
        custom_attributes: convert_attributes(item.custom_attributes.as_deref()),
    }
}
