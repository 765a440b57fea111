//! Client → proxy → mocked Shopify, end to end.

#![allow(clippy::unwrap_used)]

use backoffice_admin::shopify::{
    AbandonedCheckout, Filters, Order, PLACEHOLDER_FIRST_NAME, ProductStatus, ShopifyError,
};
use backoffice_admin::tables::{LoadState, TableController};
use backoffice_integration_tests::{TEST_TOKEN, TestContext, UPSTREAM_PATH};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn upstream_data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": data,
        "extensions": { "cost": { "requestedQueryCost": 10 } },
    }))
}

fn order_node(id: u32, total: &str) -> Value {
    json!({
        "node": {
            "id": format!("gid://shopify/Order/{id}"),
            "name": format!("#{id}"),
            "displayFinancialStatus": "PAID",
            "displayFulfillmentStatus": "UNFULFILLED",
            "totalPriceSet": { "shopMoney": { "amount": total, "currencyCode": "USD" } },
        }
    })
}

#[tokio::test]
async fn test_health_through_proxy() {
    let ctx = TestContext::start().await.unwrap();
    let body = reqwest::get(ctx.proxy_url("/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_fetch_products_through_proxy() {
    let ctx = TestContext::start().await.unwrap();
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .and(header("X-Shopify-Access-Token", TEST_TOKEN))
        .and(body_partial_json(json!({
            "operationName": "GetProducts",
            "variables": { "first": 20, "query": "status:active" },
        })))
        .respond_with(upstream_data(json!({
            "products": {
                "edges": [{
                    "cursor": "c1",
                    "node": {
                        "id": "gid://shopify/Product/1",
                        "title": "Pineapple Mug",
                        "status": "ACTIVE",
                        "totalInventory": 7,
                        "variants": { "edges": [
                            { "node": { "id": "v1", "price": "10.00" } },
                            { "node": { "id": "v2", "price": "25.00" } },
                            { "node": { "id": "v3", "price": "5.00" } },
                        ] },
                    },
                }],
                "pageInfo": { "hasNextPage": true, "hasPreviousPage": false, "endCursor": "c1" },
            }
        })))
        .expect(1)
        .mount(&ctx.upstream)
        .await;

    let filters = Filters {
        status: Some("active".to_string()),
        limit: Some(20),
        ..Filters::default()
    };
    let page = ctx.client.fetch_products(&filters).await.unwrap();

    assert_eq!(page.entities.len(), 1);
    let product = &page.entities[0];
    assert_eq!(product.title, "Pineapple Mug");
    assert_eq!(product.status, ProductStatus::Active);
    assert_eq!(product.total_inventory, 7);
    assert_eq!(product.price.min, Decimal::from(10));
    assert_eq!(product.price.max, Decimal::from(25));
    assert_eq!(product.variants.len(), 3);
    assert!(page.has_next_page);
    assert_eq!(page.page_info.end_cursor.as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_orders_table_sorts_loaded_page() {
    let ctx = TestContext::start().await.unwrap();
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .and(body_partial_json(json!({ "operationName": "GetOrders" })))
        .respond_with(upstream_data(json!({
            "orders": {
                "edges": [
                    order_node(1001, "30.00"),
                    order_node(1002, "100.00"),
                    order_node(1003, "9.50"),
                ],
                "pageInfo": { "hasNextPage": false },
            }
        })))
        .expect(1)
        .mount(&ctx.upstream)
        .await;

    let mut table = TableController::<Order>::default();
    assert_eq!(table.load(&ctx.client).await, &LoadState::Success);

    let names = |t: &TableController<Order>| {
        t.rows().iter().map(|o| o.name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&table), vec!["#1001", "#1002", "#1003"]);

    assert!(table.sort_by("total_price"));
    assert_eq!(names(&table), vec!["#1003", "#1001", "#1002"]);

    assert!(table.sort_by("total_price"));
    assert_eq!(names(&table), vec!["#1002", "#1001", "#1003"]);

    // No refetch: the mock expects exactly one call.
    assert!(table.next_page().is_none());
}

#[tokio::test]
async fn test_logical_errors_reach_table_error_state() {
    let ctx = TestContext::start().await.unwrap();
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{
                "message": "Throttled",
                "extensions": { "code": "THROTTLED" },
            }],
        })))
        .mount(&ctx.upstream)
        .await;

    let mut table = TableController::<Order>::default();
    table.load(&ctx.client).await;

    let info = table.error().unwrap();
    assert_eq!(info.code, "THROTTLED");
    assert_eq!(info.message, "Throttled");
    assert!(table.rows().is_empty());

    table.dismiss_error();
    assert_eq!(table.state(), &LoadState::Idle);
}

#[tokio::test]
async fn test_upstream_auth_failure_keeps_status() {
    let ctx = TestContext::start().await.unwrap();
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": "[API] Invalid API key or access token (unrecognized login or wrong password)",
        })))
        .mount(&ctx.upstream)
        .await;

    let err = ctx
        .client
        .fetch_orders(&Filters::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ShopifyError::Status { status: 401, .. }));
    let info = err.info();
    assert_eq!(info.code, "HTTP_401");
    assert!(info.message.starts_with("[API] Invalid API key"));
}

#[tokio::test]
async fn test_abandoned_checkouts_with_customer() {
    let ctx = TestContext::start().await.unwrap();
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .and(body_partial_json(json!({
            "operationName": "GetAbandonedCheckouts",
            "variables": { "query": "customer_id:*" },
        })))
        .respond_with(upstream_data(json!({
            "abandonedCheckouts": {
                "edges": [{ "node": {
                    "id": "gid://shopify/AbandonedCheckout/9",
                    "abandonedCheckoutUrl": "https://test-store.myshopify.com/recover/9",
                    "customer": { "id": "gid://shopify/Customer/5" },
                    "totalPriceSet": { "shopMoney": { "amount": "42.00", "currencyCode": "USD" } },
                    "lineItems": { "edges": [
                        { "node": { "id": "li1", "title": "Mug", "quantity": 2 } },
                    ] },
                } }],
            }
        })))
        .expect(1)
        .mount(&ctx.upstream)
        .await;

    let filters = Filters {
        has_customer: Some(true),
        ..Filters::default()
    };
    let page = ctx.client.fetch_abandoned_checkouts(&filters).await.unwrap();

    let checkout: &AbandonedCheckout = &page.entities[0];
    assert_eq!(checkout.recovery_url, "https://test-store.myshopify.com/recover/9");
    assert!(!checkout.is_recovered());
    assert_eq!(checkout.item_count(), 2);
    let customer = checkout.customer.as_ref().unwrap();
    assert_eq!(customer.id, "gid://shopify/Customer/5");
    assert_eq!(customer.first_name, PLACEHOLDER_FIRST_NAME);
    // Presentment money falls back to shop money.
    assert_eq!(checkout.total_price_set.presentment_money.amount, "42.00");
}

#[tokio::test]
async fn test_dashboard_stats_through_proxy() {
    let ctx = TestContext::start().await.unwrap();
    for (operation, field, count) in [
        ("CountProducts", "products", 2),
        ("CountOrders", "orders", 1),
        ("CountAbandonedCheckouts", "abandonedCheckouts", 0),
    ] {
        let edges: Vec<Value> = (0..count)
            .map(|i| json!({ "node": { "id": format!("{field}-{i}") } }))
            .collect();
        Mock::given(method("POST"))
            .and(path(UPSTREAM_PATH))
            .and(body_partial_json(json!({ "operationName": operation })))
            .respond_with(upstream_data(json!({
                field: { "edges": edges, "pageInfo": { "hasNextPage": false } },
            })))
            .expect(1)
            .mount(&ctx.upstream)
            .await;
    }

    let stats = ctx.client.dashboard_stats().await.unwrap();
    assert_eq!(stats.product_count, 2);
    assert_eq!(stats.order_count, 1);
    assert_eq!(stats.abandoned_checkout_count, 0);
}
