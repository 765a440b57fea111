//! Product domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use backoffice_core::{InventoryPolicy, ProductStatus};

/// Price range across a product's variants.
///
/// `min` is the first variant's price; `max` is the highest price across
/// all variants. `max >= min` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// A chosen value for one product option on a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g. "Size").
    pub name: String,
    /// Chosen value (e.g. "Large").
    pub value: String,
}

/// A product option and its possible values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub name: String,
    /// 1-based position.
    pub position: u32,
    pub values: Vec<String>,
}

/// A product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant ID.
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// SKU code.
    pub sku: Option<String>,
    /// Barcode.
    pub barcode: Option<String>,
    /// Current price (0 when the wire value is missing or unparseable).
    pub price: Decimal,
    /// Compare-at price (original price if on sale).
    pub compare_at_price: Option<Decimal>,
    /// Inventory quantity (across all locations).
    pub inventory_quantity: i64,
    /// Out-of-stock selling policy.
    pub inventory_policy: InventoryPolicy,
    /// Option values that identify this variant.
    pub selected_options: Vec<SelectedOption>,
    /// 1-based position within the product.
    pub position: u32,
}

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image ID.
    pub id: Option<String>,
    /// Image URL.
    pub src: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// 1-based position within the product.
    pub position: u32,
}

/// A product in the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Plain text description.
    pub description: String,
    /// Product type/category.
    pub product_type: String,
    /// Vendor name.
    pub vendor: String,
    /// Product tags in wire order (duplicates kept).
    pub tags: Vec<String>,
    /// Product status.
    pub status: ProductStatus,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Publication timestamp.
    pub published_at: Option<String>,
    /// Total inventory quantity across all variants.
    pub total_inventory: i64,
    /// Derived price range.
    pub price: PriceRange,
    /// Product variants.
    pub variants: Vec<Variant>,
    /// Product images.
    pub images: Vec<Image>,
    /// Product options.
    pub options: Vec<ProductOption>,
}
