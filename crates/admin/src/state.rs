//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ShopifyAdminConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    shopify: ShopifyAdminConfig,
    http: reqwest::Client,
}

impl AppState {
    /// Build state for proxying to the configured store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(shopify: ShopifyAdminConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("backoffice-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { shopify, http }),
        })
    }

    /// Upstream store configuration.
    #[must_use]
    pub fn shopify(&self) -> &ShopifyAdminConfig {
        &self.inner.shopify
    }

    /// Shared HTTP client for upstream calls.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("shopify", &self.inner.shopify)
            .finish_non_exhaustive()
    }
}
