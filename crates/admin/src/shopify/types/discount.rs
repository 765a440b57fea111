//! Discount code domain types.

use serde::{Deserialize, Serialize};

pub use backoffice_core::{DiscountStatus, DiscountType};

/// A code-based discount as managed in the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCode {
    /// Discount node ID.
    pub id: String,
    /// Internal title.
    pub title: String,
    /// Human-readable summary generated by Shopify.
    pub summary: String,
    /// Current status.
    pub status: DiscountStatus,
    /// Start of the validity window.
    pub starts_at: Option<String>,
    /// End of the validity window (open-ended if `None`).
    pub ends_at: Option<String>,
    /// Maximum number of redemptions.
    pub usage_limit: Option<u64>,
    /// Whether each customer may redeem it only once.
    pub applies_once_per_customer: bool,
    /// The code customers type at checkout.
    pub code: String,
    /// Kind of discount.
    pub discount_type: DiscountType,
}
