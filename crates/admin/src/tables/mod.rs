//! Admin table screens: products, orders, abandoned checkouts and discount codes.
//!
//! Each screen is a [`TableController`] over a [`TableRow`] type. Sorting is
//! page-local: it reorders the rows already loaded and never refetches.

mod checkouts;
mod controller;
mod discounts;
mod orders;
mod products;

pub use controller::{LoadRequest, LoadState, RequestToken, SortDirection, SortState, TableController};

use std::cmp::Ordering;
use std::future::Future;

use backoffice_core::parse_amount;

use crate::components::DataTableConfig;
use crate::shopify::{AdminClient, Filters, Page, ShopifyError};

/// A row type that can back an admin table.
pub trait TableRow: Clone + Sized {
    /// Screen descriptor; its sortable columns are the keys [`Self::compare`] accepts.
    fn table_config() -> DataTableConfig;

    /// Compare two rows by a sortable column key, ascending.
    ///
    /// Returns `None` when `column` is not sortable for this row type.
    fn compare(a: &Self, b: &Self, column: &str) -> Option<Ordering>;

    /// Fetch one page of rows.
    fn fetch(
        client: &AdminClient,
        filters: &Filters,
    ) -> impl Future<Output = Result<Page<Self>, ShopifyError>> + Send;
}

/// Case-insensitive text comparison.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare decimal amount strings numerically. Unparseable sorts as zero.
pub(crate) fn compare_amount(a: &str, b: &str) -> Ordering {
    parse_amount(Some(a)).cmp(&parse_amount(Some(b)))
}
