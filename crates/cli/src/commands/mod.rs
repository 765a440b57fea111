//! CLI command implementations.

pub mod info;
pub mod list;
pub mod stats;

use backoffice_admin::config::ConfigError;
use backoffice_admin::shopify::{ErrorInfo, ShopifyError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// A table load ended in the error state.
    #[error("{}: {}", .0.code, .0.message)]
    Load(ErrorInfo),

    #[error("Column '{column}' is not sortable. Sortable columns: {available}")]
    UnsortableColumn { column: String, available: String },

    #[error("Unknown {filter} '{value}'. Options: {available}")]
    UnknownFilterValue {
        filter: String,
        value: String,
        available: String,
    },

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
