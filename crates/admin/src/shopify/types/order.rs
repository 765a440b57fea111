//! Order domain types.

use serde::{Deserialize, Serialize};

use super::common::{Address, CustomAttribute, VariantRef};
use super::customer::Customer;

pub use backoffice_core::{FinancialStatus, FulfillmentStatus};

/// A line item on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item ID.
    pub id: String,
    /// Product title at time of purchase.
    pub title: String,
    /// Quantity ordered.
    pub quantity: u64,
    /// Unit price as a decimal string.
    pub price: String,
    /// Variant bought, if it still exists.
    pub variant: Option<VariantRef>,
    /// Custom attributes in display order.
    pub custom_attributes: Vec<CustomAttribute>,
}

/// An order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: String,
    /// Human-readable name (e.g. "#1001").
    pub name: String,
    /// Numeric order number parsed from `name` (0 if unparseable).
    pub order_number: u64,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Financial status.
    pub financial_status: FinancialStatus,
    /// Fulfillment status.
    pub fulfillment_status: FulfillmentStatus,
    /// Currency code.
    pub currency_code: String,
    /// Subtotal as a decimal string.
    pub subtotal_price: String,
    /// Total tax as a decimal string.
    pub total_tax: String,
    /// Total discounts as a decimal string.
    pub total_discounts: String,
    /// Grand total as a decimal string.
    pub total_price: String,
    /// Line items.
    pub line_items: Vec<LineItem>,
    /// Customer reference.
    pub customer: Option<Customer>,
    /// Billing address.
    pub billing_address: Option<Address>,
    /// Shipping address.
    pub shipping_address: Option<Address>,
    /// Tags joined with ", ".
    pub tags: String,
    /// Order note.
    pub note: Option<String>,
}

impl Order {
    /// Total number of units across all line items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|li| li.quantity).sum()
    }
}
