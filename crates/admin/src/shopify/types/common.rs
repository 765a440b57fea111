//! Common domain types shared across entities.

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Types
// =============================================================================

/// Currency used when the wire omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves wire precision, never negative).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Default for Money {
    fn default() -> Self {
        Self {
            amount: backoffice_core::ZERO_AMOUNT.to_string(),
            currency_code: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// A price in both the shop currency and the buyer's presentment currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountSet {
    /// Amount in the shop's currency.
    pub shop_money: Money,
    /// Amount in the currency the buyer saw.
    pub presentment_money: Money,
}

// =============================================================================
// Address Types
// =============================================================================

/// Mailing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// First line of the address.
    pub address1: Option<String>,
    /// Second line of the address.
    pub address2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Province or state code.
    pub province_code: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country_code: Option<String>,
    /// Postal/ZIP code.
    pub zip: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// A free-form key/value pair attached to an order, line item or checkout.
///
/// Lists of these keep wire order; the order is display-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttribute {
    pub key: String,
    pub value: String,
}

/// The variant a line item was bought as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: String,
    pub title: String,
    pub sku: Option<String>,
}

// =============================================================================
// Pagination Types
// =============================================================================

/// Pagination information.
///
/// Cursors are opaque and surfaced unchanged from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Cursor for the first item.
    pub start_cursor: Option<String>,
    /// Cursor for the last item.
    pub end_cursor: Option<String>,
}

/// One fetched page of transformed entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Entities in backend order.
    pub entities: Vec<T>,
    /// Whether a next page exists.
    pub has_next_page: bool,
    /// Whether a previous page exists.
    pub has_previous_page: bool,
    /// Raw cursor pair.
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Build a page from entities and backend page info.
    #[must_use]
    pub fn new(entities: Vec<T>, page_info: PageInfo) -> Self {
        Self {
            has_next_page: page_info.has_next_page,
            has_previous_page: page_info.has_previous_page,
            entities,
            page_info,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(Vec::new(), PageInfo::default())
    }
}
