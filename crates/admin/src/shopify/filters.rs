//! Shopify search-syntax query builder.
//!
//! Each entity has a typed filter struct with a pure `to_query()`. Clauses
//! are joined with ` AND ` in a fixed order; multi-value fields become a
//! parenthesized ` OR ` group. Empty filters produce `""` (match all).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 20;
/// Largest page size the Admin API accepts.
pub const MAX_LIMIT: u32 = 250;

/// Loosely-typed filter object shared by every table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub product_type: Option<String>,
    pub vendor: Option<String>,
    pub tags: Vec<String>,
    pub created_at_after: Option<NaiveDate>,
    pub created_at_before: Option<NaiveDate>,
    pub total_price_min: Option<Decimal>,
    pub total_price_max: Option<Decimal>,
    pub financial_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub has_customer: Option<bool>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub sort_key: Option<String>,
    pub reverse: bool,
}

impl Filters {
    /// Page size clamped to `1..=250`, defaulting to 20.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Non-blank cursor, if any.
    #[must_use]
    pub fn after(&self) -> Option<String> {
        non_blank(self.cursor.as_deref()).map(str::to_string)
    }

    /// Sort key as a GraphQL enum value (`createdAt` → `CREATED_AT`).
    #[must_use]
    pub fn sort_key_variable(&self) -> Option<String> {
        non_blank(self.sort_key.as_deref()).map(to_enum_case)
    }
}

/// Product list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub product_type: Option<String>,
    pub vendor: Option<String>,
    pub tags: Vec<String>,
    pub created_at_after: Option<NaiveDate>,
    pub created_at_before: Option<NaiveDate>,
}

/// Order list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilters {
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub financial_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub tags: Vec<String>,
    pub created_at_after: Option<NaiveDate>,
    pub created_at_before: Option<NaiveDate>,
    pub total_price_min: Option<Decimal>,
    pub total_price_max: Option<Decimal>,
    pub has_customer: Option<bool>,
}

/// Abandoned checkout list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFilters {
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub created_at_after: Option<NaiveDate>,
    pub created_at_before: Option<NaiveDate>,
    pub total_price_min: Option<Decimal>,
    pub total_price_max: Option<Decimal>,
    pub has_customer: Option<bool>,
}

/// Discount code list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountFilters {
    pub search_term: Option<String>,
    pub status: Option<String>,
}

impl ProductFilters {
    /// Search fields a product search term is matched against.
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "tag", "vendor"];

    /// Build the Shopify search query.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut clauses = Clauses::default();
        clauses.search(self.search_term.as_deref(), Self::SEARCH_FIELDS);
        clauses.field("status", self.status.as_deref());
        clauses.field("product_type", self.product_type.as_deref());
        clauses.field("vendor", self.vendor.as_deref());
        clauses.tags(&self.tags);
        clauses.date_range("created_at", self.created_at_after, self.created_at_before);
        clauses.finish()
    }
}

impl OrderFilters {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    /// Build the Shopify search query.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut clauses = Clauses::default();
        clauses.search(self.search_term.as_deref(), Self::SEARCH_FIELDS);
        clauses.field("status", self.status.as_deref());
        clauses.field("financial_status", self.financial_status.as_deref());
        clauses.field("fulfillment_status", self.fulfillment_status.as_deref());
        clauses.tags(&self.tags);
        clauses.date_range("created_at", self.created_at_after, self.created_at_before);
        clauses.price_range("total_price", self.total_price_min, self.total_price_max);
        clauses.has_customer(self.has_customer);
        clauses.finish()
    }
}

impl CheckoutFilters {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    /// Build the Shopify search query.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut clauses = Clauses::default();
        clauses.search(self.search_term.as_deref(), Self::SEARCH_FIELDS);
        clauses.field("status", self.status.as_deref());
        clauses.date_range("created_at", self.created_at_after, self.created_at_before);
        clauses.price_range("total_price", self.total_price_min, self.total_price_max);
        clauses.has_customer(self.has_customer);
        clauses.finish()
    }
}

impl DiscountFilters {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "code"];

    /// Build the Shopify search query.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut clauses = Clauses::default();
        clauses.search(self.search_term.as_deref(), Self::SEARCH_FIELDS);
        clauses.field("status", self.status.as_deref());
        clauses.finish()
    }
}

impl From<&Filters> for ProductFilters {
    fn from(f: &Filters) -> Self {
        Self {
            search_term: f.search_term.clone(),
            status: f.status.clone(),
            product_type: f.product_type.clone(),
            vendor: f.vendor.clone(),
            tags: f.tags.clone(),
            created_at_after: f.created_at_after,
            created_at_before: f.created_at_before,
        }
    }
}

impl From<&Filters> for OrderFilters {
    fn from(f: &Filters) -> Self {
        Self {
            search_term: f.search_term.clone(),
            status: f.status.clone(),
            financial_status: f.financial_status.clone(),
            fulfillment_status: f.fulfillment_status.clone(),
            tags: f.tags.clone(),
            created_at_after: f.created_at_after,
            created_at_before: f.created_at_before,
            total_price_min: f.total_price_min,
            total_price_max: f.total_price_max,
            has_customer: f.has_customer,
        }
    }
}

impl From<&Filters> for CheckoutFilters {
    fn from(f: &Filters) -> Self {
        Self {
            search_term: f.search_term.clone(),
            status: f.status.clone(),
            created_at_after: f.created_at_after,
            created_at_before: f.created_at_before,
            total_price_min: f.total_price_min,
            total_price_max: f.total_price_max,
            has_customer: f.has_customer,
        }
    }
}

impl From<&Filters> for DiscountFilters {
    fn from(f: &Filters) -> Self {
        Self {
            search_term: f.search_term.clone(),
            status: f.status.clone(),
        }
    }
}

// =============================================================================
// Clause accumulation
// =============================================================================

#[derive(Default)]
struct Clauses(Vec<String>);

impl Clauses {
    /// `field:*term*` across each search field, OR'd when there are several.
    fn search(&mut self, term: Option<&str>, fields: &[&str]) {
        let Some(term) = non_blank(term) else {
            return;
        };
        let pattern = quote(&format!("*{term}*"));
        let parts: Vec<String> = fields
            .iter()
            .map(|field| format!("{field}:{pattern}"))
            .collect();
        self.push_group(parts);
    }

    /// Exact match. Comma-separated values become an OR group.
    fn field(&mut self, name: &str, value: Option<&str>) {
        let Some(value) = non_blank(value) else {
            return;
        };
        let parts: Vec<String> = value
            .split(',')
            .filter_map(|v| non_blank(Some(v)))
            .map(|v| format!("{name}:{}", quote(v)))
            .collect();
        self.push_group(parts);
    }

    fn tags(&mut self, tags: &[String]) {
        let parts: Vec<String> = tags
            .iter()
            .filter_map(|t| non_blank(Some(t)))
            .map(|t| format!("tag:{}", quote(t)))
            .collect();
        self.push_group(parts);
    }

    /// Inclusive date bounds.
    fn date_range(&mut self, name: &str, after: Option<NaiveDate>, before: Option<NaiveDate>) {
        if let Some(after) = after {
            self.0.push(format!("{name}:>={}", after.format("%Y-%m-%d")));
        }
        if let Some(before) = before {
            self.0.push(format!("{name}:<={}", before.format("%Y-%m-%d")));
        }
    }

    /// Inclusive price bounds.
    fn price_range(&mut self, name: &str, min: Option<Decimal>, max: Option<Decimal>) {
        if let Some(min) = min {
            self.0.push(format!("{name}:>={min}"));
        }
        if let Some(max) = max {
            self.0.push(format!("{name}:<={max}"));
        }
    }

    fn has_customer(&mut self, has_customer: Option<bool>) {
        match has_customer {
            Some(true) => self.0.push("customer_id:*".to_string()),
            Some(false) => self.0.push("-customer_id:*".to_string()),
            None => {}
        }
    }

    fn push_group(&mut self, mut parts: Vec<String>) {
        match parts.len() {
            0 => {}
            1 => self.0.append(&mut parts),
            _ => self.0.push(format!("({})", parts.join(" OR "))),
        }
    }

    fn finish(self) -> String {
        self.0.join(" AND ")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Quote a value that contains whitespace, quotes, colons or parentheses.
fn quote(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | ':' | '(' | ')'));
    if needs_quotes {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// `createdAt` / `created_at` / `created-at` → `CREATED_AT`.
fn to_enum_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if matches!(c, '-' | ' ' | '_') {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }
    out
}
