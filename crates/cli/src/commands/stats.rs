//! `stats` - dashboard counts.

use backoffice_admin::shopify::{AdminClient, DashboardStats};

use super::CliError;

/// Fetch and print the dashboard counts.
///
/// # Errors
///
/// Returns an error if any of the three counts fails.
#[allow(clippy::print_stdout)]
pub async fn run(client: &AdminClient, json: bool) -> Result<(), CliError> {
    let stats = client.dashboard_stats().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", render(&stats));
    }
    Ok(())
}

fn render(stats: &DashboardStats) -> String {
    format!(
        "Products:             {}\nOrders:               {}\nAbandoned checkouts:  {}",
        stats.product_count, stats.order_count, stats.abandoned_checkout_count
    )
}
