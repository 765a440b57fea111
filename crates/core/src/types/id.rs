//! Shopify global IDs and order-number helpers.
//!
//! Use the `define_gid!` macro to create type-safe wrappers around Shopify
//! global IDs (`gid://shopify/<Resource>/<number>`) so product and order IDs
//! cannot be mixed up.

/// Prefix shared by every Shopify global ID.
pub const GID_PREFIX: &str = "gid://shopify/";

/// Macro to define a type-safe Shopify GID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()` which accepts either a full GID or a bare numeric ID
/// - `as_str()` and `numeric()` accessors
///
/// # Example
///
/// ```rust
/// # use backoffice_core::define_gid;
/// define_gid!(ProductGid, "Product");
///
/// let id = ProductGid::new("123");
/// assert_eq!(id.as_str(), "gid://shopify/Product/123");
/// assert_eq!(id.numeric(), "123");
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident, $resource:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Shopify resource name used in the GID path.
            pub const RESOURCE: &'static str = $resource;

            /// Create an ID from a full GID or a bare numeric ID.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                let id = id.into();
                if id.starts_with($crate::types::id::GID_PREFIX) {
                    Self(id)
                } else {
                    Self(format!("{}{}/{}", $crate::types::id::GID_PREFIX, $resource, id))
                }
            }

            /// Get the full GID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the trailing numeric segment.
            #[must_use]
            pub fn numeric(&self) -> &str {
                $crate::types::id::extract_numeric_id(&self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_gid!(ProductGid, "Product");
define_gid!(OrderGid, "Order");

/// Extract the trailing segment of a Shopify GID.
///
/// Returns the input unchanged when it has no `/`.
#[must_use]
pub fn extract_numeric_id(gid: &str) -> &str {
    gid.rsplit('/').next().unwrap_or(gid)
}

/// Parse the numeric order number out of an order name such as `#1001`.
///
/// A single leading `#` is stripped. Anything that is not a plain integer
/// yields 0.
#[must_use]
pub fn parse_order_number(name: &str) -> u64 {
    let trimmed = name.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .parse()
        .unwrap_or(0)
}
