//! Domain types for the Shopify back-office.
//!
//! These are the application's internal shapes, produced fresh by the
//! conversion layer on every fetch. They are separate from the raw wire
//! nodes in [`super::wire`].

pub mod checkout;
pub mod common;
pub mod customer;
pub mod discount;
pub mod order;
pub mod product;

// Re-export all types for convenience
pub use checkout::*;
pub use common::*;
pub use customer::*;
pub use discount::*;
pub use order::*;
pub use product::*;
