//! Abandoned checkout domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{AmountSet, CustomAttribute, VariantRef};
use super::customer::Customer;

/// A line item in an abandoned checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLineItem {
    pub id: String,
    pub title: String,
    pub quantity: u64,
    pub variant: Option<VariantRef>,
    /// Unit price before discounts.
    pub original_unit_price_set: AmountSet,
    /// Unit price after discounts.
    pub discounted_unit_price_set: AmountSet,
    pub custom_attributes: Vec<CustomAttribute>,
}

/// A tax applied to an abandoned checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    pub title: String,
    /// Rate as a fraction (0.0825).
    pub rate: Decimal,
    /// Rate as a percentage (8.25).
    pub rate_percentage: Decimal,
    /// Tax amount.
    pub price_set: AmountSet,
}

/// A checkout the buyer left without completing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbandonedCheckout {
    /// Checkout ID.
    pub id: String,
    /// Link that restores the buyer's cart.
    pub recovery_url: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Set once the checkout was eventually completed.
    pub completed_at: Option<String>,
    pub total_price_set: AmountSet,
    pub subtotal_price_set: AmountSet,
    pub total_discount_set: AmountSet,
    pub total_tax_set: AmountSet,
    /// Discount codes in wire order.
    pub discount_codes: Vec<String>,
    /// Custom attributes in display order.
    pub custom_attributes: Vec<CustomAttribute>,
    /// Customer reference (placeholder PII).
    pub customer: Option<Customer>,
    pub line_items: Vec<CheckoutLineItem>,
    pub tax_lines: Vec<TaxLine>,
}

impl AbandonedCheckout {
    /// Whether the buyer came back and completed the purchase.
    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|li| li.quantity).sum()
    }
}
