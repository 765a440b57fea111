//! Conversions from wire nodes to domain types.
//!
//! Every function here is total: missing numbers become 0, missing
//! collections become empty lists and unknown enum values take the most
//! conservative internal value. Nothing in this module returns an error.

mod checkouts;
mod customers;
mod discounts;
mod orders;
mod products;

pub use checkouts::{convert_abandoned_checkout, convert_checkout_line_item, convert_tax_line};
pub use customers::{convert_customer, convert_customer_id};
pub use discounts::convert_discount_node;
pub use orders::{convert_line_item, convert_order};
pub use products::{convert_image, convert_product, convert_variant, price_range};

use backoffice_core::normalize_amount;

use super::types::{
    Address, AmountSet, CustomAttribute, DEFAULT_CURRENCY, Money, PageInfo, VariantRef,
};
use super::wire::{WireAddress, WireAttribute, WireMoney, WireMoneyBag, WirePageInfo, WireVariantRef};

// =============================================================================
// Shared helpers
// =============================================================================

/// Convert a money value, defaulting to `0.00 USD`.
pub fn convert_money(money: Option<&WireMoney>) -> Money {
    money.map_or_else(Money::default, |m| Money {
        amount: normalize_amount(m.amount.as_deref()),
        currency_code: m
            .currency_code
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    })
}

/// Convert an amount set. A missing presentment amount mirrors the shop amount.
pub fn convert_money_bag(bag: Option<&WireMoneyBag>) -> AmountSet {
    let Some(bag) = bag else {
        return AmountSet::default();
    };
    let shop_money = convert_money(bag.shop_money.as_ref());
    let presentment_money = bag
        .presentment_money
        .as_ref()
        .map_or_else(|| shop_money.clone(), |m| convert_money(Some(m)));
    AmountSet {
        shop_money,
        presentment_money,
    }
}

/// Shop-currency amount of an amount set as a decimal string.
pub fn shop_amount(bag: Option<&WireMoneyBag>) -> String {
    convert_money_bag(bag).shop_money.amount
}

/// Key/value attributes in wire order. Entries without a key are dropped.
pub fn convert_attributes(attributes: Option<&[WireAttribute]>) -> Vec<CustomAttribute> {
    attributes
        .unwrap_or_default()
        .iter()
        .filter_map(|a| {
            Some(CustomAttribute {
                key: a.key.clone().filter(|k| !k.is_empty())?,
                value: a.value.clone().unwrap_or_default(),
            })
        })
        .collect()
}

pub fn convert_variant_ref(variant: Option<&WireVariantRef>) -> Option<VariantRef> {
    let variant = variant?;
    Some(VariantRef {
        id: variant.id.clone()?,
        title: variant.title.clone().unwrap_or_default(),
        sku: variant.sku.clone().filter(|s| !s.is_empty()),
    })
}

pub fn convert_address(address: Option<&WireAddress>) -> Option<Address> {
    address.map(|a| Address {
        first_name: a.first_name.clone(),
        last_name: a.last_name.clone(),
        company: a.company.clone(),
        address1: a.address1.clone(),
        address2: a.address2.clone(),
        city: a.city.clone(),
        province_code: a.province_code.clone(),
        country_code: a.country_code_v2.clone(),
        zip: a.zip.clone(),
        phone: a.phone.clone(),
    })
}

/// Page info with cursors passed through unchanged.
pub fn convert_page_info(page_info: Option<&WirePageInfo>) -> PageInfo {
    page_info.map_or_else(PageInfo::default, |p| PageInfo {
        has_next_page: p.has_next_page.unwrap_or(false),
        has_previous_page: p.has_previous_page.unwrap_or(false),
        start_cursor: p.start_cursor.clone(),
        end_cursor: p.end_cursor.clone(),
    })
}

/// Non-negative quantity; missing or negative is 0.
pub fn convert_quantity(quantity: Option<i64>) -> u64 {
    quantity.and_then(|q| u64::try_from(q).ok()).unwrap_or(0)
}

/// 1-based position from a list index.
pub fn position(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}
