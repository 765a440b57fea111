//! `<table> info` - columns and filters a table offers.

use std::fmt::Write as _;

use backoffice_admin::components::DataTableConfig;
use backoffice_admin::tables::TableRow;

use super::CliError;

/// Print the table's descriptor.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
#[allow(clippy::print_stdout)]
pub fn run<R: TableRow>(json: bool) -> Result<(), CliError> {
    let config = R::table_config();
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render(&config));
    }
    Ok(())
}

fn render(config: &DataTableConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Table: {}", config.table_id);
    let _ = writeln!(out, "Search: {}", config.search_placeholder);

    out.push_str("\nColumns:\n");
    for column in &config.columns {
        let mut flags = Vec::new();
        if column.sortable {
            flags.push("sortable");
        }
        if !column.default_visible {
            flags.push("hidden");
        }
        let _ = writeln!(
            out,
            "  {:<20} {:<18} {}",
            column.key,
            column.label,
            flags.join(", ")
        );
    }

    if !config.filters.is_empty() {
        out.push_str("\nFilters:\n");
    }
    for filter in &config.filters {
        let detail = if filter.options.is_empty() {
            filter.placeholder.clone().unwrap_or_default()
        } else {
            filter.option_values().join(", ")
        };
        let _ = writeln!(
            out,
            "  {:<20} {:<18} {:<13} {}",
            filter.key,
            filter.label,
            filter.filter_type.as_str(),
            detail
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_admin::shopify::{DiscountCode, Order};

    #[test]
    fn test_render_orders() {
        let text = render(&Order::table_config());
        assert!(text.starts_with("Table: orders\n"));
        assert!(text.contains("Search: Search orders by number or email..."));
        assert!(text.lines().any(|l| l.starts_with("  total_price") && l.ends_with("sortable")));
        assert!(text.lines().any(|l| l.starts_with("  tags") && l.ends_with("hidden")));
        let fulfillment = text
            .lines()
            .find(|l| l.starts_with("  fulfillment_status") && l.contains("multi_select"))
            .unwrap_or_default();
        assert!(fulfillment.ends_with("unfulfilled, partial, fulfilled, restocked"));
    }

    #[test]
    fn test_render_text_filter_shows_placeholder() {
        let text = render(&Order::table_config());
        assert!(
            text.lines()
                .any(|l| l.starts_with("  tags") && l.ends_with("Comma-separated tags"))
        );
    }

    #[test]
    fn test_render_discounts_status_options() {
        let text = render(&DiscountCode::table_config());
        assert!(
            text.lines()
                .any(|l| l.contains("select") && l.ends_with("active, scheduled, expired"))
        );
    }
}
