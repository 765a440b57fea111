//! Customer conversion.
//!
//! The plan tier in use does not expose customer PII on order and
//! abandoned-checkout nodes, so only the ID is taken from the wire and every
//! other field is a fixed placeholder.

use crate::shopify::types::Customer;
use crate::shopify::wire::WireCustomer;

/// Convert a customer reference. `None` when there is no customer or no ID.
pub fn convert_customer(customer: Option<&WireCustomer>) -> Option<Customer> {
    customer
        .and_then(|c| c.id.as_deref())
        .and_then(convert_customer_id)
}

/// Build a placeholder customer for a non-blank ID.
pub fn convert_customer_id(id: &str) -> Option<Customer> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some(Customer::placeholder(id))
}
