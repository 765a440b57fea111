//! GraphQL operation definitions for the Shopify Admin API.
//!
//! Documents live in `graphql/admin/queries/*.graphql`, one file per entity,
//! and are sent whole with the operation name selecting the query (the same
//! request body `#[derive(GraphQLQuery)]` produces). The `GraphQLQuery` impls
//! are written by hand: responses decode into the lenient nodes in
//! [`super::wire`] rather than schema-generated types, so no schema file is
//! needed at build time.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::wire::{
    Connection, WireAbandonedCheckout, WireDiscountNode, WireIdNode, WireOrder, WireProduct,
};

/// Largest page size the Admin API accepts.
pub const MAX_PAGE_SIZE: i64 = 250;

/// Implement `GraphQLQuery` for an operation struct.
macro_rules! operation {
    ($name:ident, $variables:ty, $data:ty, $document:expr) => {
        impl GraphQLQuery for $name {
            type Variables = $variables;
            type ResponseData = $data;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $document,
                    operation_name: stringify!($name),
                }
            }
        }
    };
}

// =============================================================================
// Shared variables
// =============================================================================

/// Variables for every paginated list query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVariables {
    pub first: i64,
    pub after: Option<String>,
    pub query: Option<String>,
    pub sort_key: Option<String>,
    pub reverse: bool,
}

/// Variables for counting queries (ID-only pages).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountVariables {
    pub first: i64,
    pub after: Option<String>,
    pub query: Option<String>,
}

/// Variables for single-node lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeVariables {
    pub id: String,
}

// =============================================================================
// Documents
// =============================================================================

const PRODUCTS: &str = include_str!("../../graphql/admin/queries/products.graphql");
const ORDERS: &str = include_str!("../../graphql/admin/queries/orders.graphql");
const CHECKOUTS: &str = include_str!("../../graphql/admin/queries/checkouts.graphql");
const DISCOUNTS: &str = include_str!("../../graphql/admin/queries/discounts.graphql");

// =============================================================================
// Product queries
// =============================================================================

pub struct GetProducts;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetProductsData {
    pub products: Option<Connection<WireProduct>>,
}

operation!(GetProducts, ListVariables, GetProductsData, PRODUCTS);

pub struct GetProduct;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetProductData {
    pub product: Option<WireProduct>,
}

operation!(GetProduct, NodeVariables, GetProductData, PRODUCTS);

pub struct CountProducts;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountProductsData {
    pub products: Option<Connection<WireIdNode>>,
}

operation!(CountProducts, CountVariables, CountProductsData, PRODUCTS);

// =============================================================================
// Order queries
// =============================================================================

pub struct GetOrders;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetOrdersData {
    pub orders: Option<Connection<WireOrder>>,
}

operation!(GetOrders, ListVariables, GetOrdersData, ORDERS);

pub struct GetOrder;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetOrderData {
    pub order: Option<WireOrder>,
}

operation!(GetOrder, NodeVariables, GetOrderData, ORDERS);

pub struct CountOrders;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountOrdersData {
    pub orders: Option<Connection<WireIdNode>>,
}

operation!(CountOrders, CountVariables, CountOrdersData, ORDERS);

// =============================================================================
// Abandoned checkout queries
// =============================================================================

pub struct GetAbandonedCheckouts;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAbandonedCheckoutsData {
    pub abandoned_checkouts: Option<Connection<WireAbandonedCheckout>>,
}

operation!(GetAbandonedCheckouts, ListVariables, GetAbandonedCheckoutsData, CHECKOUTS);

pub struct CountAbandonedCheckouts;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountAbandonedCheckoutsData {
    pub abandoned_checkouts: Option<Connection<WireIdNode>>,
}

operation!(CountAbandonedCheckouts, CountVariables, CountAbandonedCheckoutsData, CHECKOUTS);

// =============================================================================
// Discount queries
// =============================================================================

pub struct GetDiscountCodes;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDiscountCodesData {
    pub code_discount_nodes: Option<Connection<WireDiscountNode>>,
}

operation!(GetDiscountCodes, ListVariables, GetDiscountCodesData, DISCOUNTS);


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use graphql_parser::query::{Definition, OperationDefinition};

    fn bodies() -> Vec<(&'static str, &'static str)> {
        let list = ListVariables::default;
        let count = CountVariables::default;
        let node = || NodeVariables { id: String::new() };
        [
            (GetProducts::build_query(list()).operation_name, PRODUCTS),
            (GetProduct::build_query(node()).operation_name, PRODUCTS),
            (CountProducts::build_query(count()).operation_name, PRODUCTS),
            (GetOrders::build_query(list()).operation_name, ORDERS),
            (GetOrder::build_query(node()).operation_name, ORDERS),
            (CountOrders::build_query(count()).operation_name, ORDERS),
            (GetAbandonedCheckouts::build_query(list()).operation_name, CHECKOUTS),
            (CountAbandonedCheckouts::build_query(count()).operation_name, CHECKOUTS),
            (GetDiscountCodes::build_query(list()).operation_name, DISCOUNTS),
        ]
        .into()
    }

    fn operation_names(document: &str) -> Vec<String> {
        let parsed = graphql_parser::parse_query::<String>(document).unwrap();
        parsed
            .definitions
            .into_iter()
            .filter_map(|definition| match definition {
                Definition::Operation(OperationDefinition::Query(query)) => query.name,
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_list_variables_serialize_camel_case() {
        let body = GetProducts::build_query(ListVariables {
            first: 20,
            after: Some("abc".to_string()),
            query: Some("status:active".to_string()),
            sort_key: Some("TITLE".to_string()),
            reverse: true,
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["operationName"], "GetProducts");
        assert_eq!(json["variables"]["first"], 20);
        assert_eq!(json["variables"]["after"], "abc");
        assert_eq!(json["variables"]["sortKey"], "TITLE");
        assert_eq!(json["variables"]["reverse"], true);
    }

    #[test]
    fn test_documents_parse() {
        for document in [PRODUCTS, ORDERS, CHECKOUTS, DISCOUNTS] {
            if let Err(e) = graphql_parser::parse_query::<String>(document) {
                panic!("document does not parse: {e}\n{document}");
            }
        }
    }

    #[test]
    fn test_operation_name_is_defined_in_its_document() {
        for (operation, document) in bodies() {
            let names = operation_names(document);
            assert!(
                names.iter().any(|n| n == operation),
                "{operation} not in {names:?}"
            );
        }
    }

    #[test]
    fn test_operation_names_unique_per_document() {
        for document in [PRODUCTS, ORDERS, CHECKOUTS, DISCOUNTS] {
            let mut names = operation_names(document);
            let total = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), total);
        }
    }
}
