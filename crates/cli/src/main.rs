//! Backoffice CLI - list Shopify data through the admin tables.
//!
//! # Usage
//!
//! ```bash
//! # Active products, first page
//! bo-cli products list --status active
//!
//! # Paid orders over $100 this year, sorted by total on the loaded page
//! bo-cli orders list --financial-status paid --min-total 100 \
//!     --created-after 2025-01-01 --sort total_price --desc
//!
//! # Third page of the same listing
//! bo-cli orders list --financial-status paid --page 3
//!
//! # Columns, filters and filter options of a table
//! bo-cli orders info
//!
//! # Dashboard counts
//! bo-cli stats
//! ```
//!
//! # Commands
//!
//! - `products|orders|checkouts|discounts list` - One page of a table
//! - `products|orders|checkouts|discounts info` - Columns and filters of a table
//! - `stats` - Product, order and abandoned checkout counts
//!
//! Operations go to `BACKOFFICE_GRAPHQL_ENDPOINT` (the local proxy) unless
//! `--endpoint` is given.

#![cfg_attr(not(test), forbid(unsafe_code))]

use backoffice_admin::config::ClientConfig;
use backoffice_admin::shopify::{AbandonedCheckout, AdminClient, DiscountCode, Order, Product};
use backoffice_admin::tables::TableRow;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod commands;

use commands::CliError;
use commands::list::{Describe, ListArgs};

#[derive(Debug, Parser)]
#[command(name = "bo-cli")]
#[command(author, version, about = "Shopify back-office CLI")]
struct Cli {
    /// GraphQL endpoint (overrides `BACKOFFICE_GRAPHQL_ENDPOINT`)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Products table
    Products {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Orders table
    Orders {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Abandoned checkouts table
    Checkouts {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Discount codes table
    Discounts {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Show dashboard counts
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
enum TableAction {
    /// Load one page
    List(ListArgs),
    /// Show columns, filters and filter options
    Info {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let endpoint = cli.endpoint.as_deref();
    match cli.command {
        Commands::Products { action } => table::<Product>(action, endpoint).await,
        Commands::Orders { action } => table::<Order>(action, endpoint).await,
        Commands::Checkouts { action } => table::<AbandonedCheckout>(action, endpoint).await,
        Commands::Discounts { action } => table::<DiscountCode>(action, endpoint).await,
        Commands::Stats { json } => commands::stats::run(&client(endpoint)?, json).await,
    }
}

async fn table<R>(action: TableAction, endpoint: Option<&str>) -> Result<(), CliError>
where
    R: TableRow + Describe + Serialize,
{
    match action {
        TableAction::List(args) => commands::list::run::<R>(&client(endpoint)?, &args).await,
        TableAction::Info { json } => commands::info::run::<R>(json),
    }
}

fn client(endpoint: Option<&str>) -> Result<AdminClient, CliError> {
    let config = match endpoint {
        Some(endpoint) => ClientConfig::with_endpoint(endpoint)?,
        None => ClientConfig::from_env()?,
    };
    Ok(AdminClient::new(&config)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_orders_list() {
        let cli = Cli::try_parse_from([
            "bo-cli",
            "orders",
            "list",
            "--financial-status",
            "paid",
            "--sort",
            "total_price",
            "--desc",
            "--endpoint",
            "http://localhost:9000/graphql",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/graphql"));
        let Commands::Orders {
            action: TableAction::List(args),
        } = cli.command
        else {
            panic!("expected orders list");
        };
        assert_eq!(args.financial_status.as_deref(), Some("paid"));
        assert_eq!(args.sort.as_deref(), Some("total_price"));
        assert!(args.desc);
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["bo-cli", "products", "list", "--desc"]).is_err());
    }

    #[test]
    fn test_parse_table_info() {
        let cli = Cli::try_parse_from(["bo-cli", "discounts", "info", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Discounts {
                action: TableAction::Info { json: true }
            }
        ));
    }

    #[test]
    fn test_parse_page() {
        let cli = Cli::try_parse_from(["bo-cli", "products", "list", "--page", "3"]).unwrap();
        let Commands::Products {
            action: TableAction::List(args),
        } = cli.command
        else {
            panic!("expected products list");
        };
        assert_eq!(args.page, 3);
        assert!(Cli::try_parse_from(["bo-cli", "products", "list", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["bo-cli", "products", "list", "--cursor", "abc"]).is_err());
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from(["bo-cli", "stats", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { json: true }));
    }
}
