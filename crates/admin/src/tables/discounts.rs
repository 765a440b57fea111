//! Discount codes table.

use std::cmp::Ordering;
use std::future::Future;

use crate::components::{DataTableConfig, FilterOption, TableColumn, TableFilter};
use crate::shopify::{AdminClient, DiscountCode, Filters, Page, ShopifyError};

use super::{TableRow, compare_text};

impl TableRow for DiscountCode {
    fn table_config() -> DataTableConfig {
        DataTableConfig::new("discount_codes")
            .column(TableColumn::sortable("title", "Title"))
            .column(TableColumn::sortable("code", "Code"))
            .column(TableColumn::sortable("status", "Status"))
            .column(TableColumn::sortable("discount_type", "Type"))
            .column(TableColumn::new("summary", "Summary"))
            .column(TableColumn::sortable("starts_at", "Starts"))
            .column(TableColumn::sortable("ends_at", "Ends").visible(false))
            .column(TableColumn::sortable("usage_limit", "Usage limit").visible(false))
            .filter(TableFilter::select(
                "status",
                "Status",
                vec![
                    FilterOption::new("active", "Active"),
                    FilterOption::new("scheduled", "Scheduled"),
                    FilterOption::new("expired", "Expired"),
                ],
            ))
            .search_placeholder("Search discounts by title or code...")
            .empty_state("No discount codes", None)
    }

    fn compare(a: &Self, b: &Self, column: &str) -> Option<Ordering> {
        let ordering = match column {
            "title" => compare_text(&a.title, &b.title),
            "code" => compare_text(&a.code, &b.code),
            "status" => a.status.as_str().cmp(b.status.as_str()),
            "discount_type" => a.discount_type.as_str().cmp(b.discount_type.as_str()),
            "starts_at" => a.starts_at.cmp(&b.starts_at),
            "ends_at" => a.ends_at.cmp(&b.ends_at),
            "usage_limit" => a.usage_limit.cmp(&b.usage_limit),
            _ => return None,
        };
        Some(ordering)
    }

    fn fetch(
        client: &AdminClient,
        filters: &Filters,
    ) -> impl Future<Output = Result<Page<Self>, ShopifyError>> + Send {
        client.fetch_discount_codes(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::{DiscountStatus, DiscountType};

    fn discount(code: &str, usage_limit: Option<u64>) -> DiscountCode {
        DiscountCode {
            id: format!("gid://shopify/DiscountCodeNode/{code}"),
            title: code.to_string(),
            summary: String::new(),
            status: DiscountStatus::Active,
            starts_at: None,
            ends_at: None,
            usage_limit,
            applies_once_per_customer: false,
            code: code.to_string(),
            discount_type: DiscountType::Basic,
        }
    }

    #[test]
    fn test_every_sortable_column_compares() {
        let (a, b) = (discount("A", None), discount("B", Some(1)));
        for column in DiscountCode::table_config().sortable_columns() {
            assert!(DiscountCode::compare(&a, &b, column).is_some(), "{column}");
        }
        assert!(DiscountCode::compare(&a, &b, "summary").is_none());
    }

    #[test]
    fn test_code_sort_ignores_case() {
        let lower = discount("save10", None);
        let upper = discount("SAVE20", None);
        assert_eq!(
            DiscountCode::compare(&lower, &upper, "code"),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_unlimited_usage_sorts_first() {
        let unlimited = discount("A", None);
        let limited = discount("B", Some(5));
        assert_eq!(
            DiscountCode::compare(&unlimited, &limited, "usage_limit"),
            Some(Ordering::Less)
        );
    }
}
