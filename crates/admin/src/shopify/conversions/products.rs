//! Product conversion functions.

use backoffice_core::parse_amount;
use rust_decimal::Decimal;

use crate::shopify::types::{
    Image, InventoryPolicy, PriceRange, Product, ProductOption, ProductStatus, SelectedOption,
    Variant,
};
use crate::shopify::wire::{WireImage, WireProduct, WireProductOption, WireVariant};

use super::position;

/// Convert a product node.
pub fn convert_product(product: WireProduct) -> Product {
    let variants: Vec<Variant> = product
        .variants
        .map(|c| c.into_nodes())
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, v)| convert_variant(v, index))
        .collect();

    let images = product
        .images
        .map(|c| c.into_nodes())
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, i)| convert_image(i, index))
        .collect();

    let options = product
        .options
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, o)| convert_option(o, index))
        .collect();

    Product {
        id: product.id.unwrap_or_default(),
        title: product.title.unwrap_or_default(),
        handle: product.handle.unwrap_or_default(),
        description: product.description.unwrap_or_default(),
        product_type: product.product_type.unwrap_or_default(),
        vendor: product.vendor.unwrap_or_default(),
        tags: product.tags.unwrap_or_default(),
        status: product
            .status
            .as_deref()
            .map_or_else(ProductStatus::default, |s| {
                ProductStatus::from_wire(&s.trim().to_ascii_uppercase())
            }),
        created_at: product.created_at,
        updated_at: product.updated_at,
        published_at: product.published_at,
        total_inventory: product.total_inventory.unwrap_or(0),
        price: price_range(&variants),
        variants,
        images,
        options,
    }
}

/// Price range over a product's variants.
///
/// `min` is the first variant's price and `max` is the largest price seen,
/// so `max >= min` always holds. No variants gives `0..0`.
#[must_use]
pub fn price_range(variants: &[Variant]) -> PriceRange {
    let Some(first) = variants.first() else {
        return PriceRange::default();
    };
    let max = variants
        .iter()
        .map(|v| v.price)
        .fold(first.price, Decimal::max);
    PriceRange {
        min: first.price,
        max,
    }
}

/// Convert a variant at `index` in its product's list.
pub fn convert_variant(variant: WireVariant, index: usize) -> Variant {
    Variant {
        id: variant.id.unwrap_or_default(),
        title: variant.title.unwrap_or_default(),
        sku: variant.sku.filter(|s| !s.is_empty()),
        barcode: variant.barcode.filter(|s| !s.is_empty()),
        price: parse_amount(variant.price.as_deref()),
        compare_at_price: variant
            .compare_at_price
            .as_deref()
            .and_then(|raw| raw.trim().parse::<Decimal>().ok())
            .map(|d| d.max(Decimal::ZERO)),
        inventory_quantity: variant.inventory_quantity.unwrap_or(0),
        inventory_policy: variant
            .inventory_policy
            .as_deref()
            .map_or_else(InventoryPolicy::default, |p| {
                InventoryPolicy::from_wire(&p.trim().to_ascii_uppercase())
            }),
        selected_options: variant
            .selected_options
            .unwrap_or_default()
            .into_iter()
            .map(|o| SelectedOption {
                name: o.name.unwrap_or_default(),
                value: o.value.unwrap_or_default(),
            })
            .collect(),
        position: position(index),
    }
}

/// Convert an image at `index` in its product's list.
pub fn convert_image(image: WireImage, index: usize) -> Image {
    Image {
        id: image.id,
        src: image.url.unwrap_or_default(),
        alt_text: image.alt_text.filter(|a| !a.is_empty()),
        position: position(index),
    }
}

fn convert_option(option: WireProductOption, index: usize) -> ProductOption {
    ProductOption {
        id: option.id.unwrap_or_default(),
        name: option.name.unwrap_or_default(),
        position: position(index),
        values: option.values.unwrap_or_default(),
    }
}
