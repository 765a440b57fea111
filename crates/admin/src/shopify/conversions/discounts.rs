//! Discount code conversion.

use crate::shopify::types::{DiscountCode, DiscountStatus, DiscountType};
use crate::shopify::wire::WireDiscountNode;

/// Convert a code discount node.
///
/// Returns `None` for nodes whose union member is not a code discount
/// (automatic discounts or types this client does not know).
pub fn convert_discount_node(node: WireDiscountNode) -> Option<DiscountCode> {
    let discount = node.discount?;
    let discount_type = discount
        .typename
        .as_deref()
        .and_then(DiscountType::from_typename)?;

    let code = discount
        .codes
        .map(|c| c.into_nodes())
        .unwrap_or_default()
        .into_iter()
        .find_map(|c| c.code.filter(|code| !code.is_empty()))
        .unwrap_or_default();

    Some(DiscountCode {
        id: node.id.unwrap_or_default(),
        title: discount.title.unwrap_or_default(),
        summary: discount.summary.unwrap_or_default(),
        status: discount
            .status
            .as_deref()
            .map_or_else(DiscountStatus::default, DiscountStatus::from_wire),
        starts_at: discount.starts_at,
        ends_at: discount.ends_at,
        usage_limit: discount.usage_limit.and_then(|l| u64::try_from(l).ok()),
        applies_once_per_customer: discount.applies_once_per_customer.unwrap_or(false),
        code,
        discount_type,
    })
}
