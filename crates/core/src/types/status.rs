//! Status enums for back-office entities.
//!
//! Each enum carries the internal (snake_case) vocabulary used by the admin
//! tables and search filters, plus a `from_wire` mapping from the
//! `SCREAMING_SNAKE_CASE` values the Shopify Admin API returns. Unknown wire
//! values always map to the most conservative variant and are never
//! propagated raw.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a status from its internal string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct StatusParseError {
    /// Which status vocabulary was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl StatusParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Order financial status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    #[default]
    Pending,
    Authorized,
    Paid,
    PartiallyPaid,
    Refunded,
    Voided,
    PartiallyRefunded,
}

impl FinancialStatus {
    /// Map a Shopify `displayFinancialStatus` value. Unknown → `Pending`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "AUTHORIZED" => Self::Authorized,
            "PAID" => Self::Paid,
            "PARTIALLY_PAID" => Self::PartiallyPaid,
            "REFUNDED" => Self::Refunded,
            "VOIDED" => Self::Voided,
            "PARTIALLY_REFUNDED" => Self::PartiallyRefunded,
            _ => Self::Pending,
        }
    }

    /// Internal string form, also used in search filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::Paid => "paid",
            Self::PartiallyPaid => "partially_paid",
            Self::Refunded => "refunded",
            Self::Voided => "voided",
            Self::PartiallyRefunded => "partially_refunded",
        }
    }
}

impl std::fmt::Display for FinancialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FinancialStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "authorized" => Ok(Self::Authorized),
            "paid" => Ok(Self::Paid),
            "partially_paid" => Ok(Self::PartiallyPaid),
            "refunded" => Ok(Self::Refunded),
            "voided" => Ok(Self::Voided),
            "partially_refunded" => Ok(Self::PartiallyRefunded),
            _ => Err(StatusParseError::new("financial status", s)),
        }
    }
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    #[default]
    Unfulfilled,
    Partial,
    Fulfilled,
    Restocked,
}

impl FulfillmentStatus {
    /// Map a Shopify `displayFulfillmentStatus` value. Unknown → `Unfulfilled`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "PARTIALLY_FULFILLED" => Self::Partial,
            "FULFILLED" => Self::Fulfilled,
            "RESTOCKED" => Self::Restocked,
            _ => Self::Unfulfilled,
        }
    }

    /// Internal string form, also used in search filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unfulfilled => "unfulfilled",
            Self::Partial => "partial",
            Self::Fulfilled => "fulfilled",
            Self::Restocked => "restocked",
        }
    }
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FulfillmentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unfulfilled" => Ok(Self::Unfulfilled),
            "partial" => Ok(Self::Partial),
            "fulfilled" => Ok(Self::Fulfilled),
            "restocked" => Ok(Self::Restocked),
            _ => Err(StatusParseError::new("fulfillment status", s)),
        }
    }
}

/// Product status in the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Product is not visible (work in progress).
    #[default]
    Draft,
    /// Product is visible on the storefront.
    Active,
    /// Product is hidden/archived.
    Archived,
}

impl ProductStatus {
    /// Map a Shopify `ProductStatus` value. Unknown → `Draft`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ACTIVE" => Self::Active,
            "ARCHIVED" => Self::Archived,
            _ => Self::Draft,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(StatusParseError::new("product status", s)),
        }
    }
}

/// What happens when a variant is ordered while out of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InventoryPolicy {
    /// Stop selling when inventory reaches zero.
    #[default]
    Deny,
    /// Keep selling (backorders).
    Continue,
}

impl InventoryPolicy {
    /// Map a Shopify `ProductVariantInventoryPolicy` value. Unknown → `Deny`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "CONTINUE" => Self::Continue,
            _ => Self::Deny,
        }
    }
}

/// Discount status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStatus {
    Active,
    /// Not redeemable; also the fallback for unknown wire values.
    #[default]
    Expired,
    Scheduled,
}

impl DiscountStatus {
    /// Map a Shopify `DiscountStatus` value. Unknown → `Expired`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ACTIVE" => Self::Active,
            "SCHEDULED" => Self::Scheduled,
            _ => Self::Expired,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Scheduled => "scheduled",
        }
    }
}

impl std::fmt::Display for DiscountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discount type (what kind of code discount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Amount off (percentage or fixed).
    Basic,
    /// Buy X get Y.
    Bxgy,
    /// Free shipping.
    FreeShipping,
    /// Provided by a Shopify app.
    App,
}

impl DiscountType {
    /// Map a GraphQL `__typename` of a code discount.
    ///
    /// Returns `None` for automatic discounts and unknown types.
    #[must_use]
    pub fn from_typename(typename: &str) -> Option<Self> {
        match typename {
            "DiscountCodeBasic" => Some(Self::Basic),
            "DiscountCodeBxgy" => Some(Self::Bxgy),
            "DiscountCodeFreeShipping" => Some(Self::FreeShipping),
            "DiscountCodeApp" => Some(Self::App),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Bxgy => "bxgy",
            Self::FreeShipping => "free_shipping",
            Self::App => "app",
        }
    }
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
