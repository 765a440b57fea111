//! Paginated fetch façade over the Shopify Admin API.
//!
//! Each list call builds one search query, issues exactly one transport call
//! and converts every node of the returned connection. Cursors are passed
//! through unchanged.

use std::sync::Arc;

use backoffice_core::{OrderGid, ProductGid};
use graphql_client::GraphQLQuery;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::config::ClientConfig;

use super::{
    ShopifyError,
    conversions::{
        convert_abandoned_checkout, convert_discount_node, convert_order, convert_page_info,
        convert_product,
    },
    filters::{CheckoutFilters, DiscountFilters, Filters, OrderFilters, ProductFilters},
    queries::{
        CountAbandonedCheckouts, CountOrders, CountProducts, CountVariables, GetAbandonedCheckouts,
        GetDiscountCodes, GetOrder, GetOrders, GetProduct, GetProducts, ListVariables,
        MAX_PAGE_SIZE, NodeVariables,
    },
    transport::GraphQLTransport,
    types::{AbandonedCheckout, DiscountCode, Order, Page, Product},
    wire::{Connection, WireIdNode},
};

/// Summary counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub product_count: u64,
    pub order_count: u64,
    pub abandoned_checkout_count: u64,
}

/// Shopify Admin data client.
///
/// Cheap to clone; clones share one HTTP connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    transport: GraphQLTransport,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.inner.transport.endpoint().as_str())
            .finish()
    }
}

impl AdminClient {
    /// Create a client posting to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ShopifyError> {
        Ok(Self::with_transport(GraphQLTransport::new(config)?))
    }

    /// Create a client over an existing transport.
    #[must_use]
    pub fn with_transport(transport: GraphQLTransport) -> Self {
        Self {
            inner: Arc::new(AdminClientInner { transport }),
        }
    }

    // =========================================================================
    // Product methods
    // =========================================================================

    /// Fetch one page of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport call fails.
    #[instrument(skip(self, filters), fields(query = tracing::field::Empty))]
    pub async fn fetch_products(&self, filters: &Filters) -> Result<Page<Product>, ShopifyError> {
        let query = ProductFilters::from(filters).to_query();
        tracing::Span::current().record("query", query.as_str());

        let data = self
            .inner
            .transport
            .execute::<GetProducts>(list_variables(filters, query))
            .await?;

        let page = into_page(data.products, convert_product);
        tracing::debug!(count = page.entities.len(), "Fetched products");
        Ok(page)
    }

    /// Get a product by ID (full GID or bare number).
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::NotFound` if the product does not exist.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<Product, ShopifyError> {
        let id = ProductGid::new(id.trim());
        let data = self
            .inner
            .transport
            .execute::<GetProduct>(NodeVariables {
                id: id.to_string(),
            })
            .await?;

        data.product
            .map(convert_product)
            .ok_or_else(|| ShopifyError::NotFound(id.to_string()))
    }

    /// Count every product matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if any batch fails.
    #[instrument(skip(self, filters))]
    pub async fn count_products(&self, filters: &Filters) -> Result<u64, ShopifyError> {
        let query = ProductFilters::from(filters).to_query();
        self.count_all::<CountProducts>(query, |data| data.products)
            .await
    }

    // =========================================================================
    // Order methods
    // =========================================================================

    /// Fetch one page of orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport call fails.
    #[instrument(skip(self, filters), fields(query = tracing::field::Empty))]
    pub async fn fetch_orders(&self, filters: &Filters) -> Result<Page<Order>, ShopifyError> {
        let query = OrderFilters::from(filters).to_query();
        tracing::Span::current().record("query", query.as_str());

        let data = self
            .inner
            .transport
            .execute::<GetOrders>(list_variables(filters, query))
            .await?;

        let page = into_page(data.orders, convert_order);
        tracing::debug!(count = page.entities.len(), "Fetched orders");
        Ok(page)
    }

    /// Get an order by ID (full GID or bare number).
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::NotFound` if the order does not exist.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> Result<Order, ShopifyError> {
        let id = OrderGid::new(id.trim());
        let data = self
            .inner
            .transport
            .execute::<GetOrder>(NodeVariables {
                id: id.to_string(),
            })
            .await?;

        data.order
            .map(convert_order)
            .ok_or_else(|| ShopifyError::NotFound(id.to_string()))
    }

    /// Count every order matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if any batch fails.
    #[instrument(skip(self, filters))]
    pub async fn count_orders(&self, filters: &Filters) -> Result<u64, ShopifyError> {
        let query = OrderFilters::from(filters).to_query();
        self.count_all::<CountOrders>(query, |data| data.orders)
            .await
    }

    // =========================================================================
    // Abandoned checkout methods
    // =========================================================================

    /// Fetch one page of abandoned checkouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport call fails.
    #[instrument(skip(self, filters), fields(query = tracing::field::Empty))]
    pub async fn fetch_abandoned_checkouts(
        &self,
        filters: &Filters,
    ) -> Result<Page<AbandonedCheckout>, ShopifyError> {
        let query = CheckoutFilters::from(filters).to_query();
        tracing::Span::current().record("query", query.as_str());

        let data = self
            .inner
            .transport
            .execute::<GetAbandonedCheckouts>(list_variables(filters, query))
            .await?;

        let page = into_page(data.abandoned_checkouts, convert_abandoned_checkout);
        tracing::debug!(count = page.entities.len(), "Fetched abandoned checkouts");
        Ok(page)
    }

    /// Count every abandoned checkout matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if any batch fails.
    #[instrument(skip(self, filters))]
    pub async fn count_abandoned_checkouts(&self, filters: &Filters) -> Result<u64, ShopifyError> {
        let query = CheckoutFilters::from(filters).to_query();
        self.count_all::<CountAbandonedCheckouts>(query, |data| data.abandoned_checkouts)
            .await
    }

    // =========================================================================
    // Discount methods
    // =========================================================================

    /// Fetch one page of code discounts.
    ///
    /// Automatic discounts and unknown union members are skipped, so a page
    /// may hold fewer entities than the connection had nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport call fails.
    #[instrument(skip(self, filters), fields(query = tracing::field::Empty))]
    pub async fn fetch_discount_codes(
        &self,
        filters: &Filters,
    ) -> Result<Page<DiscountCode>, ShopifyError> {
        let query = DiscountFilters::from(filters).to_query();
        tracing::Span::current().record("query", query.as_str());

        let data = self
            .inner
            .transport
            .execute::<GetDiscountCodes>(list_variables(filters, query))
            .await?;

        let connection = data.code_discount_nodes.unwrap_or_default();
        let page_info = convert_page_info(connection.page_info.as_ref());
        let entities: Vec<DiscountCode> = connection
            .into_nodes()
            .into_iter()
            .filter_map(convert_discount_node)
            .collect();
        tracing::debug!(count = entities.len(), "Fetched discount codes");
        Ok(Page::new(entities, page_info))
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Total products, orders and abandoned checkouts.
    ///
    /// Each count pages through its whole connection, so this is O(n) in the
    /// store's record count. Use it for summary screens only.
    ///
    /// # Errors
    ///
    /// Returns the first count error.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ShopifyError> {
        let filters = Filters::default();
        let (product_count, order_count, abandoned_checkout_count) = tokio::try_join!(
            self.count_products(&filters),
            self.count_orders(&filters),
            self.count_abandoned_checkouts(&filters),
        )?;

        Ok(DashboardStats {
            product_count,
            order_count,
            abandoned_checkout_count,
        })
    }

    /// Page through a connection 250 IDs at a time, counting nodes.
    async fn count_all<Q>(
        &self,
        query: String,
        connection: fn(Q::ResponseData) -> Option<Connection<WireIdNode>>,
    ) -> Result<u64, ShopifyError>
    where
        Q: GraphQLQuery<Variables = CountVariables>,
        Q::ResponseData: DeserializeOwned,
    {
        let query = (!query.is_empty()).then_some(query);
        let mut total: u64 = 0;
        let mut after: Option<String> = None;
        let mut batches: u32 = 0;

        loop {
            let data = self
                .inner
                .transport
                .execute::<Q>(CountVariables {
                    first: MAX_PAGE_SIZE,
                    after: after.clone(),
                    query: query.clone(),
                })
                .await?;
            batches += 1;

            let Some(connection) = connection(data) else {
                break;
            };
            total += connection.node_count() as u64;

            let page_info = connection.page_info.unwrap_or_default();
            match (page_info.has_next_page, page_info.end_cursor) {
                (Some(true), Some(cursor)) if !cursor.is_empty() && after.as_ref() != Some(&cursor) => {
                    after = Some(cursor);
                }
                _ => break,
            }
        }

        tracing::debug!(total, batches, "Counted connection");
        Ok(total)
    }
}

/// Variables for a list query from the shared filter object.
fn list_variables(filters: &Filters, query: String) -> ListVariables {
    ListVariables {
        first: i64::from(filters.page_size()),
        after: filters.after(),
        query: (!query.is_empty()).then_some(query),
        sort_key: filters.sort_key_variable(),
        reverse: filters.reverse,
    }
}

/// Convert every node of a connection into a page.
fn into_page<W, T>(connection: Option<Connection<W>>, convert: impl Fn(W) -> T) -> Page<T> {
    let connection = connection.unwrap_or_default();
    let page_info = convert_page_info(connection.page_info.as_ref());
    let entities = connection.into_nodes().into_iter().map(convert).collect();
    Page::new(entities, page_info)
}
