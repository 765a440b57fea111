//! Customer domain types.

use serde::{Deserialize, Serialize};

/// Placeholder first name for customers whose PII the plan tier hides.
pub const PLACEHOLDER_FIRST_NAME: &str = "Customer";
/// Placeholder last name for customers whose PII the plan tier hides.
pub const PLACEHOLDER_LAST_NAME: &str = "(hidden)";
/// Placeholder email for customers whose PII the plan tier hides.
pub const PLACEHOLDER_EMAIL: &str = "hidden@example.invalid";
/// Placeholder phone for customers whose PII the plan tier hides.
pub const PLACEHOLDER_PHONE: &str = "N/A";

/// A customer reference attached to an order or abandoned checkout.
///
/// Only `id` comes from Shopify. The current plan tier does not expose
/// customer PII on these paths, so the remaining fields always hold the
/// `PLACEHOLDER_*` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: String,
    /// First name (placeholder).
    pub first_name: String,
    /// Last name (placeholder).
    pub last_name: String,
    /// Email address (placeholder).
    pub email: String,
    /// Phone number (placeholder).
    pub phone: String,
}

impl Customer {
    /// Build a placeholder customer for a known ID.
    #[must_use]
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: PLACEHOLDER_FIRST_NAME.to_string(),
            last_name: PLACEHOLDER_LAST_NAME.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
            phone: PLACEHOLDER_PHONE.to_string(),
        }
    }

    /// Display name shown in tables.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
