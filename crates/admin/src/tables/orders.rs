//! Orders table.

use std::cmp::Ordering;
use std::future::Future;

use crate::components::{DataTableConfig, FilterOption, TableColumn, TableFilter};
use crate::shopify::{AdminClient, Filters, Order, Page, ShopifyError};

use super::{TableRow, compare_amount, compare_text};

fn customer_name(order: &Order) -> String {
    order
        .customer
        .as_ref()
        .map(crate::shopify::Customer::display_name)
        .unwrap_or_default()
}

impl TableRow for Order {
    fn table_config() -> DataTableConfig {
        DataTableConfig::new("orders")
            .column(TableColumn::sortable("order_number", "Order"))
            .column(TableColumn::sortable("created_at", "Date"))
            .column(TableColumn::sortable("customer", "Customer"))
            .column(TableColumn::sortable("financial_status", "Payment"))
            .column(TableColumn::sortable("fulfillment_status", "Fulfillment"))
            .column(TableColumn::sortable("total_price", "Total"))
            .column(TableColumn::sortable("items", "Items"))
            .column(TableColumn::new("tags", "Tags").visible(false))
            .filter(TableFilter::multi_select(
                "financial_status",
                "Payment",
                vec![
                    FilterOption::new("pending", "Pending"),
                    FilterOption::new("authorized", "Authorized"),
                    FilterOption::new("paid", "Paid"),
                    FilterOption::new("partially_paid", "Partially paid"),
                    FilterOption::new("refunded", "Refunded"),
                    FilterOption::new("partially_refunded", "Partially refunded"),
                    FilterOption::new("voided", "Voided"),
                ],
            ))
            .filter(TableFilter::multi_select(
                "fulfillment_status",
                "Fulfillment",
                vec![
                    FilterOption::new("unfulfilled", "Unfulfilled"),
                    FilterOption::new("partial", "Partially fulfilled"),
                    FilterOption::new("fulfilled", "Fulfilled"),
                    FilterOption::new("restocked", "Restocked"),
                ],
            ))
            .filter(TableFilter::select(
                "status",
                "Status",
                vec![
                    FilterOption::new("open", "Open"),
                    FilterOption::new("closed", "Closed"),
                    FilterOption::new("cancelled", "Cancelled"),
                ],
            ))
            .filter(TableFilter::text("tags", "Tags", "Comma-separated tags"))
            .filter(TableFilter::date_range("created_at", "Date"))
            .filter(TableFilter::number_range("total_price", "Total"))
            .search_placeholder("Search orders by number or email...")
            .empty_state("No orders found", Some("Try adjusting your filters"))
    }

    fn compare(a: &Self, b: &Self, column: &str) -> Option<Ordering> {
        let ordering = match column {
            "order_number" => a.order_number.cmp(&b.order_number),
            "created_at" => a.created_at.cmp(&b.created_at),
            "customer" => compare_text(&customer_name(a), &customer_name(b)),
            "financial_status" => a.financial_status.as_str().cmp(b.financial_status.as_str()),
            "fulfillment_status" => a
                .fulfillment_status
                .as_str()
                .cmp(b.fulfillment_status.as_str()),
            "total_price" => compare_amount(&a.total_price, &b.total_price),
            "items" => a.item_count().cmp(&b.item_count()),
            _ => return None,
        };
        Some(ordering)
    }

    fn fetch(
        client: &AdminClient,
        filters: &Filters,
    ) -> impl Future<Output = Result<Page<Self>, ShopifyError>> + Send {
        client.fetch_orders(filters)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shopify::{Customer, FinancialStatus, FulfillmentStatus};

    fn order(number: u64, total: &str, customer: Option<&str>) -> Order {
        Order {
            id: format!("gid://shopify/Order/{number}"),
            name: format!("#{number}"),
            order_number: number,
            created_at: None,
            updated_at: None,
            financial_status: FinancialStatus::Paid,
            fulfillment_status: FulfillmentStatus::Unfulfilled,
            currency_code: "USD".to_string(),
            subtotal_price: total.to_string(),
            total_tax: "0.00".to_string(),
            total_discounts: "0.00".to_string(),
            total_price: total.to_string(),
            line_items: vec![],
            customer: customer.map(Customer::placeholder),
            billing_address: None,
            shipping_address: None,
            tags: String::new(),
            note: None,
        }
    }

    #[test]
    fn test_every_sortable_column_compares() {
        let (a, b) = (order(1001, "1.00", None), order(1002, "2.00", Some("c")));
        for column in Order::table_config().sortable_columns() {
            assert!(Order::compare(&a, &b, column).is_some(), "{column}");
        }
        assert!(Order::compare(&a, &b, "tags").is_none());
    }

    #[test]
    fn test_total_sorts_numerically() {
        let small = order(1001, "9.99", None);
        let large = order(1002, "100.00", None);
        assert_eq!(
            Order::compare(&small, &large, "total_price"),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_missing_customer_sorts_first() {
        let guest = order(1001, "1.00", None);
        let known = order(1002, "1.00", Some("gid://shopify/Customer/1"));
        assert_eq!(Order::compare(&guest, &known, "customer"), Some(Ordering::Less));
    }

    #[test]
    fn test_status_filters_offer_every_status() {
        let config = Order::table_config();

        let financial = config.find_filter("financial_status").unwrap();
        for status in [
            FinancialStatus::Pending,
            FinancialStatus::Authorized,
            FinancialStatus::Paid,
            FinancialStatus::PartiallyPaid,
            FinancialStatus::Refunded,
            FinancialStatus::Voided,
            FinancialStatus::PartiallyRefunded,
        ] {
            assert!(financial.accepts(status.as_str()), "{status}");
        }

        let fulfillment = config.find_filter("fulfillment_status").unwrap();
        for status in [
            FulfillmentStatus::Unfulfilled,
            FulfillmentStatus::Partial,
            FulfillmentStatus::Fulfilled,
            FulfillmentStatus::Restocked,
        ] {
            assert!(fulfillment.accepts(status.as_str()), "{status}");
        }
    }
}
