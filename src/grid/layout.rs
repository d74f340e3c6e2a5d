//! Pure layout of the product grid
//!
//! Products flow left to right, top to bottom, in catalog order. Nothing is
//! sorted or filtered here.

use std::ops::Range;

use crate::catalog::Product;

pub const GRID_COLUMNS: usize = 2;

/// Outer padding around the whole grid
pub const CONTENT_PADDING: f32 = 16.0;
/// Gap around each card
pub const CARD_MARGIN: f32 = 8.0;
/// Padding inside the card and inside its text block
pub const CARD_PADDING: f32 = 8.0;
pub const IMAGE_SIZE: f32 = 140.0;
pub const IMAGE_SPACING: f32 = 16.0;
pub const NAME_SPACING: f32 = 8.0;
pub const DETAIL_BUTTON_WIDTH: f32 = 42.0;

pub const NAME_SIZE: f32 = 16.0;
pub const BRAND_SIZE: f32 = 12.0;
pub const PRICE_SIZE: f32 = 18.0;

/// Height of one grid row, margins included
pub const ROW_HEIGHT: f32 = 2.0 * CARD_MARGIN
    + 2.0 * CARD_PADDING
    + IMAGE_SIZE
    + IMAGE_SPACING
    + 2.0 * CARD_PADDING
    + NAME_SIZE * 1.3
    + NAME_SPACING
    + BRAND_SIZE * 1.3
    + DETAIL_BUTTON_WIDTH;

/// What a single card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard<'a> {
    /// Position in the catalog
    pub index: usize,
    pub image_url: Option<&'a str>,
    pub name: &'a str,
    pub brand: &'a str,
    pub price_label: String,
}

impl<'a> ProductCard<'a> {
    pub fn new(index: usize, product: &'a Product) -> Self {
        Self {
            index,
            image_url: product.primary_image(),
            name: &product.name,
            brand: &product.brand,
            price_label: price_label(&product.price),
        }
    }
}

/// Price text as displayed: a literal "$" in front, no reformatting
pub fn price_label(price: &str) -> String {
    format!("${price}")
}

pub fn row_count(product_count: usize) -> usize {
    product_count.div_ceil(GRID_COLUMNS)
}

/// Cards of the grid rows in `rows`, each row holding at most
/// [`GRID_COLUMNS`] cards. Rows past the end of the catalog are skipped.
pub fn rows_in_range(products: &[Product], rows: Range<usize>) -> Vec<Vec<ProductCard<'_>>> {
    let end = rows.end.min(row_count(products.len()));
    (rows.start.min(end)..end)
        .map(|row| {
            let first = row * GRID_COLUMNS;
            let last = (first + GRID_COLUMNS).min(products.len());
            (first..last)
                .map(|index| ProductCard::new(index, &products[index]))
                .collect()
        })
        .collect()
}
