//! Abandoned checkouts table.

use std::cmp::Ordering;
use std::future::Future;

use crate::components::{DataTableConfig, TableColumn, TableFilter};
use crate::shopify::{AbandonedCheckout, AdminClient, Filters, Page, ShopifyError};

use super::{TableRow, compare_amount, compare_text};

fn customer_name(checkout: &AbandonedCheckout) -> String {
    checkout
        .customer
        .as_ref()
        .map(crate::shopify::Customer::display_name)
        .unwrap_or_default()
}

impl TableRow for AbandonedCheckout {
    fn table_config() -> DataTableConfig {
        DataTableConfig::new("abandoned_checkouts")
            .column(TableColumn::new("id", "Checkout"))
            .column(TableColumn::sortable("created_at", "Date"))
            .column(TableColumn::sortable("customer", "Customer"))
            .column(TableColumn::sortable("total_price", "Total"))
            .column(TableColumn::sortable("items", "Items"))
            .column(TableColumn::sortable("recovered", "Recovery status"))
            .column(TableColumn::new("recovery_url", "Recovery link").visible(false))
            .filter(TableFilter::date_range("created_at", "Date"))
            .filter(TableFilter::number_range("total_price", "Total"))
            .search_placeholder("Search checkouts by name or email...")
            .empty_state(
                "No abandoned checkouts",
                Some("Checkouts that customers leave unfinished show up here"),
            )
    }

    fn compare(a: &Self, b: &Self, column: &str) -> Option<Ordering> {
        let ordering = match column {
            "created_at" => a.created_at.cmp(&b.created_at),
            "customer" => compare_text(&customer_name(a), &customer_name(b)),
            "total_price" => compare_amount(
                &a.total_price_set.shop_money.amount,
                &b.total_price_set.shop_money.amount,
            ),
            "items" => a.item_count().cmp(&b.item_count()),
            "recovered" => a.is_recovered().cmp(&b.is_recovered()),
            _ => return None,
        };
        Some(ordering)
    }

    fn fetch(
        client: &AdminClient,
        filters: &Filters,
    ) -> impl Future<Output = Result<Page<Self>, ShopifyError>> + Send {
        client.fetch_abandoned_checkouts(filters)
    }
}
