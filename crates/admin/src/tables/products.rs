//! Products table.

use std::cmp::Ordering;
use std::future::Future;

use crate::components::{DataTableConfig, FilterOption, TableColumn, TableFilter};
use crate::shopify::{AdminClient, Filters, Page, Product, ShopifyError};

use super::{TableRow, compare_text};

impl TableRow for Product {
    fn table_config() -> DataTableConfig {
        DataTableConfig::new("products")
            .column(TableColumn::sortable("title", "Product"))
            .column(TableColumn::sortable("status", "Status"))
            .column(TableColumn::sortable("inventory", "Inventory"))
            .column(TableColumn::sortable("price", "Price"))
            .column(TableColumn::sortable("product_type", "Type"))
            .column(TableColumn::sortable("vendor", "Vendor"))
            .column(TableColumn::new("tags", "Tags").visible(false))
            .column(TableColumn::sortable("created_at", "Created").visible(false))
            .filter(TableFilter::multi_select(
                "status",
                "Status",
                vec![
                    FilterOption::new("active", "Active"),
                    FilterOption::new("draft", "Draft"),
                    FilterOption::new("archived", "Archived"),
                ],
            ))
            .filter(TableFilter::text("product_type", "Type", "Product type"))
            .filter(TableFilter::text("vendor", "Vendor", "Vendor name"))
            .filter(TableFilter::text("tags", "Tags", "Comma-separated tags"))
            .filter(TableFilter::date_range("created_at", "Created"))
            .search_placeholder("Search products by title, tag or vendor...")
            .empty_state("No products found", Some("Try adjusting your filters"))
    }

    fn compare(a: &Self, b: &Self, column: &str) -> Option<Ordering> {
        let ordering = match column {
            "title" => compare_text(&a.title, &b.title),
            "status" => a.status.as_str().cmp(b.status.as_str()),
            "inventory" => a.total_inventory.cmp(&b.total_inventory),
            "price" => a.price.min.cmp(&b.price.min),
            "product_type" => compare_text(&a.product_type, &b.product_type),
            "vendor" => compare_text(&a.vendor, &b.vendor),
            "created_at" => a.created_at.cmp(&b.created_at),
            _ => return None,
        };
        Some(ordering)
    }

    fn fetch(
        client: &AdminClient,
        filters: &Filters,
    ) -> impl Future<Output = Result<Page<Self>, ShopifyError>> + Send {
        client.fetch_products(filters)
    }
}
