//! `<table> list` - load one page of an admin table.
//!
//! The page is loaded through a [`TableController`], so `--sort` is
//! page-local: it reorders the rows already fetched and never refetches.
//! `--page N` walks forward with the end cursor of each page.

use backoffice_admin::components::DataTableConfig;
use backoffice_admin::shopify::{
    AbandonedCheckout, AdminClient, DiscountCode, Filters, Order, PageInfo, Product,
};
use backoffice_admin::tables::{LoadState, SortState, TableController, TableRow};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use super::CliError;

/// Filter and output options shared by every `list` command.
///
/// Filters a table does not understand are ignored by it.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Status (comma-separated for several)
    #[arg(long)]
    pub status: Option<String>,

    /// Product type
    #[arg(long)]
    pub product_type: Option<String>,

    /// Vendor
    #[arg(long)]
    pub vendor: Option<String>,

    /// Tags (comma-separated, any may match)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Created on or after (YYYY-MM-DD)
    #[arg(long)]
    pub created_after: Option<NaiveDate>,

    /// Created on or before (YYYY-MM-DD)
    #[arg(long)]
    pub created_before: Option<NaiveDate>,

    /// Minimum total price
    #[arg(long)]
    pub min_total: Option<Decimal>,

    /// Maximum total price
    #[arg(long)]
    pub max_total: Option<Decimal>,

    /// Financial status (comma-separated for several)
    #[arg(long)]
    pub financial_status: Option<String>,

    /// Fulfillment status (comma-separated for several)
    #[arg(long)]
    pub fulfillment_status: Option<String>,

    /// Only rows with (true) or without (false) a customer
    #[arg(long)]
    pub has_customer: Option<bool>,

    /// Page size (1-250, default 20)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Page number to load
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Server-side sort key (e.g. `created_at`, `title`)
    #[arg(long)]
    pub sort_key: Option<String>,

    /// Reverse the server-side sort
    #[arg(long)]
    pub reverse: bool,

    /// Sort the loaded page by this column
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort the loaded page descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// The filter set this invocation asks for.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters {
            search_term: self.search.clone(),
            status: self.status.clone(),
            product_type: self.product_type.clone(),
            vendor: self.vendor.clone(),
            tags: self.tags.clone(),
            created_at_after: self.created_after,
            created_at_before: self.created_before,
            total_price_min: self.min_total,
            total_price_max: self.max_total,
            financial_status: self.financial_status.clone(),
            fulfillment_status: self.fulfillment_status.clone(),
            has_customer: self.has_customer,
            limit: self.limit,
            cursor: None,
            sort_key: self.sort_key.clone(),
            reverse: self.reverse,
        }
    }

    /// Filters whose values come from a fixed option list.
    fn option_filters(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("status", self.status.as_deref()),
            ("financial_status", self.financial_status.as_deref()),
            ("fulfillment_status", self.fulfillment_status.as_deref()),
        ]
    }
}

/// Reject values a table's option filters do not offer.
///
/// Filters the table does not declare are left alone; the query builder
/// for that table ignores them.
fn check_filter_values(config: &DataTableConfig, args: &ListArgs) -> Result<(), CliError> {
    for (key, value) in args.option_filters() {
        let (Some(filter), Some(value)) = (config.find_filter(key), value) else {
            continue;
        };
        for part in value.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            if !filter.accepts(part) {
                return Err(CliError::UnknownFilterValue {
                    filter: key.to_string(),
                    value: part.to_string(),
                    available: filter.option_values().join(", "),
                });
            }
        }
    }
    Ok(())
}

/// One text line per row.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for Product {
    fn describe(&self) -> String {
        let price = if self.price.min == self.price.max {
            self.price.min.to_string()
        } else {
            format!("{} - {}", self.price.min, self.price.max)
        };
        format!(
            "{:<40} {:<9} {:>7} {}",
            self.title,
            self.status.as_str(),
            self.total_inventory,
            price
        )
    }
}

impl Describe for Order {
    fn describe(&self) -> String {
        let customer = self
            .customer
            .as_ref()
            .map_or_else(|| "-".to_string(), |c| c.display_name());
        format!(
            "{:<8} {:<10} {:<20} {:<18} {:<12} {} {}",
            self.name,
            date_part(self.created_at.as_deref()),
            customer,
            self.financial_status.as_str(),
            self.fulfillment_status.as_str(),
            self.total_price,
            self.currency_code
        )
    }
}

impl Describe for AbandonedCheckout {
    fn describe(&self) -> String {
        let customer = self
            .customer
            .as_ref()
            .map_or_else(|| "-".to_string(), |c| c.display_name());
        let recovery = if self.is_recovered() {
            "recovered"
        } else {
            "not recovered"
        };
        format!(
            "{:<10} {:<20} {:>4} items  {} {}  {}",
            date_part(self.created_at.as_deref()),
            customer,
            self.item_count(),
            self.total_price_set.shop_money.amount,
            self.total_price_set.shop_money.currency_code,
            recovery
        )
    }
}

impl Describe for DiscountCode {
    fn describe(&self) -> String {
        format!(
            "{:<16} {:<32} {:<9} {:<13} {} .. {}",
            self.code,
            self.title,
            self.status.as_str(),
            self.discount_type.as_str(),
            date_part(self.starts_at.as_deref()),
            self.ends_at.as_deref().map_or("open", |d| date_part(Some(d))),
        )
    }
}

fn date_part(timestamp: Option<&str>) -> &str {
    timestamp
        .map_or("-", |t| t.split_once('T').map_or(t, |(date, _)| date))
}

#[derive(Debug, Serialize)]
struct ListOutput<'a, R> {
    page: u32,
    entities: &'a [R],
    page_info: &'a PageInfo,
    sort: Option<&'a SortState>,
}

/// Load and print one page of `R`.
///
/// # Errors
///
/// Returns an error if `--sort` names a column the table cannot sort, if an
/// option filter value is not one the table offers, or if any page load
/// fails.
pub async fn run<R>(client: &AdminClient, args: &ListArgs) -> Result<(), CliError>
where
    R: TableRow + Describe + Serialize,
{
    let config = R::table_config();
    if let Some(column) = &args.sort
        && !config.is_sortable(column)
    {
        return Err(CliError::UnsortableColumn {
            column: column.clone(),
            available: config.sortable_columns().join(", "),
        });
    }
    check_filter_values(&config, args)?;

    let mut controller = TableController::<R>::new(args.filters());
    if let LoadState::Error(info) = controller.load(client).await {
        return Err(CliError::Load(info.clone()));
    }

    while controller.page_number() < args.page {
        let Some(request) = controller.next_page() else {
            tracing::warn!(
                page = controller.page_number(),
                "No more pages; showing the last one"
            );
            break;
        };
        let result = R::fetch(client, &request.filters).await;
        controller.complete(request.token, result);
        if let Some(info) = controller.error() {
            return Err(CliError::Load(info.clone()));
        }
    }

    if let Some(column) = &args.sort {
        controller.sort_by(column);
        if args.desc {
            controller.sort_by(column);
        }
    }

    if args.json {
        print_json(&controller)
    } else {
        print_text(&controller);
        Ok(())
    }
}

#[allow(clippy::print_stdout)]
fn print_json<R: TableRow + Serialize>(controller: &TableController<R>) -> Result<(), CliError> {
    let output = ListOutput {
        page: controller.page_number(),
        entities: controller.rows(),
        page_info: controller.page_info(),
        sort: controller.sort(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_text<R: TableRow + Describe>(controller: &TableController<R>) {
    let config = R::table_config();
    if controller.rows().is_empty() {
        println!("{}", config.empty_title);
        if let Some(description) = &config.empty_description {
            println!("{description}");
        }
        return;
    }

    for row in controller.rows() {
        println!("{}", row.describe());
    }

    println!();
    let mut footer = format!(
        "Page {} ({} rows)",
        controller.page_number(),
        controller.rows().len()
    );
    if controller.has_next_page() {
        footer.push_str(&format!(", more with --page {}", controller.page_number() + 1));
    }
    println!("{footer}");
}
